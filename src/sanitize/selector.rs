//! Selector filtering
//!
//! Selectors are inert in the injection context, so the bar is lower than
//! for values: reject anything matching a known-dangerous pattern, then
//! strip every character outside a conservative set. The character strip can
//! in principle splice a banned token together out of its fragments, so the
//! pattern check runs again on the stripped text before it is accepted.

use crate::sanitize::GLOBAL_DENYLIST;
use log::warn;

/// Patterns that reject a selector outright (matched case-insensitively)
pub const SELECTOR_DENYLIST: &[&str] = &["javascript:", "vbscript:", "data:", "<script", "@import"];

/// Characters allowed to survive in a selector, besides ASCII alphanumerics
const ALLOWED_PUNCTUATION: &[char] = &[
  '-', '_', '.', '#', ':', ',', ' ', '>', '+', '~', '*', '(', ')', '[', ']',
];

fn allowed_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || ALLOWED_PUNCTUATION.contains(&c)
}

fn matches_denylist(selector: &str) -> Option<&'static str> {
  let lowered = selector.to_lowercase();
  SELECTOR_DENYLIST
    .iter()
    .chain(GLOBAL_DENYLIST.iter())
    .copied()
    .find(|needle| lowered.contains(needle))
}

/// Sanitize one selector, returning `None` when the whole rule must go
///
/// `None` means either a denylist match or nothing left after stripping; in
/// both cases the caller drops the rule.
pub fn sanitize_selector(raw: &str) -> Option<String> {
  if let Some(pattern) = matches_denylist(raw) {
    warn!("dropping rule: selector {:?} matches {:?}", raw.trim(), pattern);
    return None;
  }

  let stripped: String = raw.chars().filter(|&c| allowed_char(c)).collect();
  let stripped = stripped.trim();
  if stripped.is_empty() {
    return None;
  }

  // Stripping may have fused fragments into a banned pattern; re-check.
  if let Some(pattern) = matches_denylist(stripped) {
    warn!(
      "dropping rule: stripped selector {:?} matches {:?}",
      stripped, pattern
    );
    return None;
  }

  Some(stripped.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_selectors_pass_through() {
    assert_eq!(
      sanitize_selector(".profile-link:hover").as_deref(),
      Some(".profile-link:hover")
    );
    assert_eq!(
      sanitize_selector("div > p + span ~ a").as_deref(),
      Some("div > p + span ~ a")
    );
  }

  #[test]
  fn denylisted_selectors_are_rejected() {
    assert_eq!(sanitize_selector("a[href^=\"javascript:\"]"), None);
    assert_eq!(sanitize_selector("a[href^='DATA:text/html']"), None);
    assert_eq!(sanitize_selector("<script>"), None);
  }

  #[test]
  fn disallowed_characters_are_stripped() {
    assert_eq!(
      sanitize_selector("a[href=\"x\"]").as_deref(),
      Some("a[hrefx]")
    );
    assert_eq!(sanitize_selector(".a {;}").as_deref(), Some(".a"));
  }

  #[test]
  fn stripping_cannot_splice_a_banned_token() {
    // '=' is stripped; the remainder would read "javascript:".
    assert_eq!(sanitize_selector("java=script: a"), None);
    assert_eq!(sanitize_selector("expres=sion(x)"), None);
  }

  #[test]
  fn empty_or_all_stripped_selectors_are_rejected() {
    assert_eq!(sanitize_selector(""), None);
    assert_eq!(sanitize_selector("   "), None);
    assert_eq!(sanitize_selector("{}&!"), None);
  }
}
