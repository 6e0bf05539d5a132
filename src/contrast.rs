//! WCAG-style contrast checks
//!
//! The profile editor warns when a user picks a text color that is hard to
//! read against their chosen background. The math follows the WCAG contrast
//! ratio definition: relative luminances of both colors, then
//! `(lighter + 0.05) / (darker + 0.05)`.
//!
//! Foreground opacity is folded in by scaling the ratio. That is not how
//! alpha compositing actually works, but for a warning heuristic it errs in
//! the right direction: a half-transparent foreground reports half the
//! contrast.
//!
//! # Examples
//!
//! ```
//! use profilecss::color::Rgb;
//! use profilecss::contrast::{contrast_ratio, has_good_contrast, suggest_text_color};
//!
//! let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
//! assert!((ratio - 21.0).abs() < 0.01);
//!
//! let report = has_good_contrast(Rgb::WHITE, Rgb::BLACK, 1.0);
//! assert!(report.is_good);
//!
//! assert_eq!(suggest_text_color(Rgb::BLACK), Rgb::WHITE);
//! ```

use crate::color::Rgb;
use serde::Serialize;

/// WCAG AA minimum contrast ratio for body text
pub const MIN_CONTRAST_AA: f64 = 4.5;

/// Outcome of a contrast check
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
  /// Whether the effective ratio meets [`MIN_CONTRAST_AA`]
  pub is_good: bool,
  /// The effective contrast ratio (opacity already applied)
  pub ratio: f64,
  /// The threshold the ratio was compared against
  pub min_required: f64,
}

/// Contrast ratio between two colors, in `[1, 21]`
///
/// Symmetric in its arguments: the lighter color is put in the numerator.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
  let la = a.relative_luminance();
  let lb = b.relative_luminance();
  (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Checks a background/foreground pair against the AA body-text threshold
///
/// `opacity` is the foreground opacity in `[0, 1]`; out-of-range values are
/// clamped so a bogus opacity cannot report better-than-real contrast.
pub fn has_good_contrast(background: Rgb, foreground: Rgb, opacity: f64) -> ContrastReport {
  let effective = contrast_ratio(background, foreground) * opacity.clamp(0.0, 1.0);
  ContrastReport {
    is_good: effective >= MIN_CONTRAST_AA,
    ratio: effective,
    min_required: MIN_CONTRAST_AA,
  }
}

/// Picks black or white text for a given background
///
/// Backgrounds with relative luminance above 0.5 get black text, everything
/// else gets white.
pub fn suggest_text_color(background: Rgb) -> Rgb {
  if background.relative_luminance() > 0.5 {
    Rgb::BLACK
  } else {
    Rgb::WHITE
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn black_on_white_is_maximal() {
    let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
    assert!((ratio - 21.0).abs() < 0.01, "ratio was {}", ratio);
  }

  #[test]
  fn identical_colors_ratio_is_one() {
    let gray = Rgb::new(0x77, 0x77, 0x77);
    assert_eq!(contrast_ratio(gray, gray), 1.0);
  }

  #[test]
  fn ratio_is_symmetric() {
    let a = Rgb::new(0x12, 0x34, 0x56);
    let b = Rgb::new(0xfe, 0xdc, 0xba);
    assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
  }

  #[test]
  fn opacity_degrades_effective_contrast() {
    let opaque = has_good_contrast(Rgb::WHITE, Rgb::BLACK, 1.0);
    let faint = has_good_contrast(Rgb::WHITE, Rgb::BLACK, 0.1);
    assert!(opaque.is_good);
    assert!(!faint.is_good);
    assert!(faint.ratio < opaque.ratio);
  }

  #[test]
  fn opacity_is_clamped() {
    let boosted = has_good_contrast(Rgb::WHITE, Rgb::new(0xee, 0xee, 0xee), 100.0);
    assert!(!boosted.is_good);
  }

  #[test]
  fn suggests_white_on_dark_and_black_on_light() {
    assert_eq!(suggest_text_color(Rgb::BLACK), Rgb::WHITE);
    assert_eq!(suggest_text_color(Rgb::WHITE), Rgb::BLACK);
    assert_eq!(suggest_text_color(Rgb::new(0x10, 0x20, 0x30)), Rgb::WHITE);
  }
}
