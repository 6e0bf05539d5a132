//! Error types for profilecss
//!
//! Only two conditions reject a stylesheet outright: the length gate and the
//! whole-document denylist scan. Everything else (bad selectors, disallowed
//! properties, dangerous values) is dropped locally and never surfaces as an
//! error, so the enum stays deliberately small.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use thiserror::Error;

/// Result type alias for profilecss operations
pub type Result<T> = std::result::Result<T, SanitizeError>;

/// Errors that reject an entire stylesheet
///
/// # Examples
///
/// ```
/// use profilecss::{sanitize_stylesheet, SanitizeError};
///
/// let oversized = "a".repeat(60_000);
/// match sanitize_stylesheet(&oversized) {
///     Err(SanitizeError::TooLong { length, limit }) => {
///         assert!(length > limit);
///     }
///     other => panic!("expected TooLong, got {:?}", other),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeError {
  /// Input exceeds the maximum accepted stylesheet length.
  ///
  /// No sanitization is attempted for oversized input; it is rejected as-is
  /// rather than truncated.
  #[error("stylesheet is {length} characters, maximum is {limit}")]
  TooLong { length: usize, limit: usize },

  /// The comment-stripped text contains a globally denylisted token.
  ///
  /// The scan runs before rule-by-rule parsing, and a hit rejects the whole
  /// document rather than attempting partial recovery.
  #[error("stylesheet contains disallowed content: {token:?}")]
  DisallowedContent { token: &'static str },
}
