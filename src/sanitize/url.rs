//! `url(...)` rewriting
//!
//! Every url() reference in a surviving declaration value is re-written
//! through a prefix allow-list. Rejected references collapse to the empty
//! string, which drops that token while leaving the rest of a compound
//! value intact.

use log::warn;

/// Prefixes a url() target may start with (matched case-insensitively)
///
/// `data:image/` keeps inline avatars and background textures working while
/// `data:text/html` and friends stay out; `/` and `./` cover same-origin
/// assets uploaded through the platform.
pub const ALLOWED_URL_PREFIXES: &[&str] = &["http://", "https://", "data:image/", "/", "./"];

/// Gate a single URL against the prefix allow-list
///
/// Returns the trimmed URL in its original case when accepted, `None`
/// otherwise. The empty string is never accepted.
pub fn sanitize_url(raw: &str) -> Option<&str> {
  let trimmed = raw.trim();
  let lowered = trimmed.to_lowercase();
  if ALLOWED_URL_PREFIXES
    .iter()
    .any(|prefix| lowered.starts_with(prefix))
  {
    Some(trimmed)
  } else {
    if !trimmed.is_empty() {
      warn!("dropping url reference {:?}: scheme not allowed", trimmed);
    }
    None
  }
}

/// Rewrite every `url(...)` occurrence in a declaration value
///
/// The scan is case-insensitive on the `url(` marker. Quoted targets keep
/// their quote character; an unterminated `url(` (no closing parenthesis) is
/// copied through untouched, matching how a lone open parenthesis would be
/// left alone by the declaration splitter.
pub fn rewrite_urls(value: &str) -> String {
  let lowered = value.to_ascii_lowercase();
  let mut out = String::with_capacity(value.len());
  let mut pos = 0;

  while let Some(found) = lowered[pos..].find("url(") {
    let start = pos + found;
    out.push_str(&value[pos..start]);

    let inner_start = start + "url(".len();
    let Some(close_offset) = value[inner_start..].find(')') else {
      out.push_str(&value[start..]);
      return out;
    };
    let close = inner_start + close_offset;

    let inner = value[inner_start..close].trim();
    let (quote, target) = strip_quotes(inner);
    match sanitize_url(target) {
      Some(clean) => {
        out.push_str("url(");
        if let Some(q) = quote {
          out.push(q);
        }
        out.push_str(clean);
        if let Some(q) = quote {
          out.push(q);
        }
        out.push(')');
      }
      // Rejected target: the whole call collapses to nothing.
      None => {}
    }
    pos = close + 1;
  }

  out.push_str(&value[pos..]);
  out
}

/// Split an optional matching quote pair off a url() target
fn strip_quotes(inner: &str) -> (Option<char>, &str) {
  for quote in ['"', '\''] {
    if let Some(rest) = inner.strip_prefix(quote) {
      let body = rest.strip_suffix(quote).unwrap_or(rest);
      return (Some(quote), body.trim());
    }
  }
  (None, inner)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn allows_http_https_and_local_paths() {
    assert_eq!(
      sanitize_url("https://example.com/a.png"),
      Some("https://example.com/a.png")
    );
    assert!(sanitize_url("http://example.com/a.png").is_some());
    assert_eq!(sanitize_url("/uploads/bg.png"), Some("/uploads/bg.png"));
    assert_eq!(sanitize_url("./bg.png"), Some("./bg.png"));
  }

  #[test]
  fn allows_only_image_data_urls() {
    assert!(sanitize_url("data:image/png;base64,AAAA").is_some());
    assert_eq!(sanitize_url("data:text/html;base64,AAAA"), None);
    assert_eq!(sanitize_url("data:application/xml,x"), None);
  }

  #[test]
  fn rejects_script_schemes() {
    assert_eq!(sanitize_url("javascript:alert(1)"), None);
    assert_eq!(sanitize_url("JaVaScRiPt:alert(1)"), None);
    assert_eq!(sanitize_url("vbscript:msgbox"), None);
    assert_eq!(sanitize_url(""), None);
  }

  #[test]
  fn prefix_check_is_case_insensitive() {
    assert_eq!(
      sanitize_url("HTTPS://Example.com/A.png"),
      Some("HTTPS://Example.com/A.png")
    );
  }

  #[test]
  fn rewrites_quoted_and_bare_targets() {
    assert_eq!(
      rewrite_urls("url(https://example.com/a.png)"),
      "url(https://example.com/a.png)"
    );
    assert_eq!(
      rewrite_urls("url(\"/uploads/bg.png\")"),
      "url(\"/uploads/bg.png\")"
    );
    assert_eq!(rewrite_urls("url( './x.png' )"), "url('./x.png')");
  }

  #[test]
  fn rejected_targets_collapse_to_nothing() {
    assert_eq!(rewrite_urls("url(ftp://example.com/a.png)"), "");
    assert_eq!(rewrite_urls("red url(ftp://x) no-repeat"), "red  no-repeat");
  }

  #[test]
  fn marker_match_is_case_insensitive() {
    assert_eq!(rewrite_urls("URL(/a.png)"), "url(/a.png)");
  }

  #[test]
  fn unterminated_calls_are_left_alone() {
    assert_eq!(rewrite_urls("url(/a.png"), "url(/a.png");
  }

  #[test]
  fn text_around_calls_is_preserved() {
    assert_eq!(
      rewrite_urls("no-repeat url(/a.png) top left"),
      "no-repeat url(/a.png) top left"
    );
  }
}
