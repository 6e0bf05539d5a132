//! User stylesheet sanitization
//!
//! Profiles accept arbitrary CSS from their owner and inject it into every
//! visitor's page, which makes this module a security boundary: whatever
//! comes out of [`sanitize_stylesheet`] is served verbatim inside a
//! `<style>` block on other people's browsers.
//!
//! The pipeline is deliberately a best-effort scanner rather than a real CSS
//! grammar. Splitting on `}` / `;` / the first `:` cannot round-trip nested
//! at-rules or strings with embedded delimiters, but it never needs to: the
//! contract is reject-or-strip, and anything the splitter mangles degrades
//! into a dropped declaration, never into something more permissive.
//!
//! Stages, in order:
//!
//! 1. length gate (UTF-16 units, oversized input rejected outright)
//! 2. comment stripping, so comments cannot hide tokens from stage 3
//! 3. whole-document denylist scan; a hit rejects everything
//! 4. split on `}` into candidate rules, dropping segments with no `{`
//! 5. per-rule selector filtering and declaration allow-listing
//! 6. surviving rules re-serialized and joined with newlines
//!
//! Sanitization is idempotent: running the pipeline over its own output
//! changes nothing. The per-unit re-checks after character stripping and
//! url() rewriting exist to keep that true even when removal fuses a banned
//! token out of fragments.

pub mod properties;
pub mod selector;
pub mod url;

use crate::error::{Result, SanitizeError};
use log::{debug, warn};
use serde::Serialize;

pub use properties::{dangerous_property, is_allowed_property, DANGEROUS_PROPERTY_SUBSTRINGS};
pub use selector::{sanitize_selector, SELECTOR_DENYLIST};
pub use url::{rewrite_urls, sanitize_url, ALLOWED_URL_PREFIXES};

/// Maximum accepted stylesheet length, in UTF-16 code units
///
/// Longer input is rejected, not truncated. UTF-16 units rather than bytes
/// so the limit agrees with what the editor counts as characters.
pub const MAX_STYLESHEET_LEN: usize = 50_000;

/// Tokens that reject the whole document when found anywhere in the
/// comment-stripped, lowercased text
///
/// `behavior:` is deliberately absent: legacy IE behaviors are common enough
/// in pasted themes that a whole-document rejection would throw away every
/// safe rule alongside them. They are still stripped declaration-by-
/// declaration via [`DANGEROUS_PROPERTY_SUBSTRINGS`] and [`VALUE_DENYLIST`].
pub const GLOBAL_DENYLIST: &[&str] = &[
  "javascript:",
  "vbscript:",
  "data:text/html",
  "expression(",
  "-moz-binding",
  "@import",
];

/// Tokens that drop a single declaration when found in its value
///
/// Superset of [`GLOBAL_DENYLIST`]; values get the check a second time
/// because url() rewriting runs after the whole-document scan.
pub const VALUE_DENYLIST: &[&str] = &[
  "javascript:",
  "vbscript:",
  "data:text/html",
  "expression(",
  "-moz-binding",
  "behavior:",
  "@import",
];

/// Outcome of [`validate_and_sanitize`]
///
/// `sanitized` may legitimately differ from the input even when `valid` is
/// true; the editor is expected to display (and persist) `sanitized`, never
/// the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
  /// Whether the input was accepted at all
  pub valid: bool,
  /// The safe stylesheet; empty when `valid` is false
  pub sanitized: String,
  /// Rejection reason, present only when `valid` is false
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl Validation {
  /// Whether sanitization removed or rewrote anything
  ///
  /// Drives the editor's "some rules were removed for safety" notice.
  pub fn rules_removed(&self, raw: &str) -> bool {
    self.sanitized != raw.trim()
  }
}

/// Validate and sanitize a user stylesheet
///
/// This is the entry point both the live preview and the save path go
/// through. Local problems (a bad selector, a disallowed property, a
/// rejected url) are silently dropped and never fail validation; only the
/// length gate and the whole-document denylist produce `valid: false`.
///
/// # Examples
///
/// ```
/// use profilecss::validate_and_sanitize;
///
/// let out = validate_and_sanitize(".profile-bio { color: #333; behavior: url(x.htc) }");
/// assert!(out.valid);
/// assert_eq!(out.sanitized, ".profile-bio { color: #333 }");
/// assert!(out.rules_removed(".profile-bio { color: #333; behavior: url(x.htc) }"));
/// ```
pub fn validate_and_sanitize(raw: &str) -> Validation {
  match sanitize_stylesheet(raw) {
    Ok(sanitized) => Validation {
      valid: true,
      sanitized,
      error: None,
    },
    Err(err) => Validation {
      valid: false,
      sanitized: String::new(),
      error: Some(err.to_string()),
    },
  }
}

/// Sanitize a stylesheet, with typed errors for the two hard-reject cases
///
/// See the module docs for the pipeline. The output is guaranteed free of
/// every [`GLOBAL_DENYLIST`] token and stable under re-sanitization.
pub fn sanitize_stylesheet(raw: &str) -> Result<String> {
  let length = raw.encode_utf16().count();
  if length > MAX_STYLESHEET_LEN {
    warn!(
      "rejecting stylesheet: {} units exceeds limit {}",
      length, MAX_STYLESHEET_LEN
    );
    return Err(SanitizeError::TooLong {
      length,
      limit: MAX_STYLESHEET_LEN,
    });
  }

  let stripped = strip_comments(raw);

  let lowered = stripped.to_lowercase();
  for &token in GLOBAL_DENYLIST {
    if lowered.contains(token) {
      warn!("rejecting stylesheet: contains {:?}", token);
      return Err(SanitizeError::DisallowedContent { token });
    }
  }

  Ok(sanitize_rules(&stripped))
}

/// Remove every `/* ... */` span
///
/// Runs before the denylist scan so a comment cannot hide a banned token
/// from it, and cannot smuggle one into a value the browser would see. An
/// unterminated comment is left in place; the later stages treat its text
/// like any other content.
fn strip_comments(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut rest = input;
  while let Some(open) = rest.find("/*") {
    out.push_str(&rest[..open]);
    match rest[open + 2..].find("*/") {
      Some(close) => rest = &rest[open + 2 + close + 2..],
      None => {
        rest = &rest[open..];
        break;
      }
    }
  }
  out.push_str(rest);
  out
}

/// Split into candidate rules and keep what survives filtering
fn sanitize_rules(text: &str) -> String {
  let mut rules: Vec<String> = Vec::new();
  let mut dropped = 0usize;

  for segment in text.split('}') {
    let Some((selector_part, body)) = segment.split_once('{') else {
      // Trailing text or malformed fragment with no block; skip silently.
      continue;
    };

    let Some(selector) = sanitize_selector(selector_part) else {
      dropped += 1;
      continue;
    };

    let declarations: Vec<String> = body.split(';').filter_map(sanitize_declaration).collect();
    if declarations.is_empty() {
      dropped += 1;
      continue;
    }

    rules.push(format!("{} {{ {} }}", selector, declarations.join("; ")));
  }

  debug!("sanitized {} rules, dropped {}", rules.len(), dropped);
  rules.join("\n")
}

/// Sanitize one `property: value` pair, `None` when it must be dropped
fn sanitize_declaration(decl: &str) -> Option<String> {
  let (property_part, value_part) = decl.split_once(':')?;

  let property = property_part.trim().to_lowercase();
  if property.is_empty() {
    return None;
  }
  if let Some(needle) = dangerous_property(&property) {
    warn!("dropping declaration {:?}: contains {:?}", property, needle);
    return None;
  }
  if !is_allowed_property(&property) && !property.starts_with("--") {
    warn!("dropping declaration {:?}: property not allowed", property);
    return None;
  }

  let value = sanitize_value(value_part.trim())?;
  if value.is_empty() {
    return None;
  }

  Some(format!("{}: {}", property, value))
}

/// Iterations after which a value that keeps changing under rewriting is
/// given up on. Each pass removes at least one url() or normalizes one
/// marker, so real values settle in one or two.
const MAX_REWRITE_PASSES: usize = 16;

/// Run a declaration value through the denylist and url() rewriting
///
/// Collapsing a rejected url() can fuse the surrounding fragments into a
/// brand-new token: another `url(...)` with an unvetted target, or a banned
/// substring split across the removed span. Rewriting therefore runs to a
/// fixpoint, with the denylist re-checked after every pass, so that every
/// url() in the final value was itself vetted and nothing banned was spliced
/// together. Values left holding a comment delimiter are dropped: the
/// global comment strip already ran, so a `/*` or `*/` here is either an
/// unterminated fragment or a spliced artifact, and on re-parse it could
/// pair with a delimiter elsewhere in the output into a comment span.
fn sanitize_value(value: &str) -> Option<String> {
  if let Some(needle) = value_matches_denylist(value) {
    warn!("dropping value: contains {:?}", needle);
    return None;
  }

  let mut current = value.to_string();
  let mut settled = false;
  for _ in 0..MAX_REWRITE_PASSES {
    let rewritten = rewrite_urls(&current);
    if let Some(needle) = value_matches_denylist(&rewritten) {
      warn!("dropping value: rewriting exposed {:?}", needle);
      return None;
    }
    if rewritten == current {
      settled = true;
      break;
    }
    current = rewritten;
  }
  if !settled {
    warn!("dropping value: did not settle under url rewriting");
    return None;
  }

  if current.contains("*/") || current.contains("/*") {
    warn!("dropping value: contains a comment delimiter");
    return None;
  }

  Some(current.trim().to_string())
}

fn value_matches_denylist(value: &str) -> Option<&'static str> {
  let lowered = value.to_lowercase();
  VALUE_DENYLIST
    .iter()
    .copied()
    .find(|needle| lowered.contains(needle))
}
