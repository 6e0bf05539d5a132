//! Color parsing and luminance math
//!
//! The profile editor only deals in 6-digit hex colors (the color pickers
//! never emit anything else), so this module parses exactly that format:
//! `#RRGGBB` with an optional leading `#`, case-insensitive, no alpha
//! channel.
//!
//! # Examples
//!
//! ```
//! use profilecss::color::Rgb;
//!
//! let bg: Rgb = "#1A2B3C".parse().unwrap();
//! assert_eq!(bg, Rgb::new(0x1a, 0x2b, 0x3c));
//! assert_eq!(Rgb::WHITE.to_hex(), "#FFFFFF");
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
  /// Input is not 6 hex digits (after the optional `#`)
  #[error("expected 6 hex digits, got {input:?}")]
  InvalidLength { input: String },

  /// Input contains a non-hexadecimal character
  #[error("invalid hex digit in {input:?}")]
  InvalidDigit { input: String },
}

/// An opaque sRGB color
///
/// Components are 0-255. There is no alpha channel; opacity is supplied
/// separately where it matters (see [`crate::contrast::has_good_contrast`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
  /// Red component (0-255)
  pub r: u8,
  /// Green component (0-255)
  pub g: u8,
  /// Blue component (0-255)
  pub b: u8,
}

impl Rgb {
  /// Opaque black
  pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

  /// Opaque white
  pub const WHITE: Self = Self {
    r: 255,
    g: 255,
    b: 255,
  };

  /// Creates a new color from 0-255 components
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Formats the color as an uppercase `#RRGGBB` string
  ///
  /// # Examples
  ///
  /// ```
  /// use profilecss::color::Rgb;
  ///
  /// assert_eq!(Rgb::new(26, 43, 60).to_hex(), "#1A2B3C");
  /// ```
  pub fn to_hex(self) -> String {
    format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
  }

  /// Relative luminance in `[0, 1]`
  ///
  /// Channels are linearized with the piecewise sRGB transfer function and
  /// weighted per ITU-R BT.709, which is the basis WCAG contrast ratios are
  /// defined on.
  ///
  /// # Examples
  ///
  /// ```
  /// use profilecss::color::Rgb;
  ///
  /// assert_eq!(Rgb::BLACK.relative_luminance(), 0.0);
  /// assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < 1e-9);
  /// ```
  pub fn relative_luminance(self) -> f64 {
    0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
  }
}

/// Linearize one 0-255 sRGB channel
fn linearize(channel: u8) -> f64 {
  let c = f64::from(channel) / 255.0;
  if c <= 0.03928 {
    c / 12.92
  } else {
    ((c + 0.055) / 1.055).powf(2.4)
  }
}

impl FromStr for Rgb {
  type Err = ColorParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 {
      return Err(ColorParseError::InvalidLength {
        input: s.to_string(),
      });
    }
    // from_str_radix tolerates a leading '+', so check digit-by-digit first.
    // This also keeps the byte slicing below on char boundaries.
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(ColorParseError::InvalidDigit {
        input: s.to_string(),
      });
    }
    let parse_pair = |pair: &str| u8::from_str_radix(pair, 16).unwrap_or(0);
    Ok(Self {
      r: parse_pair(&digits[0..2]),
      g: parse_pair(&digits[2..4]),
      b: parse_pair(&digits[4..6]),
    })
  }
}

impl fmt::Display for Rgb {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.to_hex())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_with_and_without_hash() {
    assert_eq!("#ff0000".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
    assert_eq!("00ff00".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 0));
  }

  #[test]
  fn parsing_is_case_insensitive() {
    assert_eq!(
      "#AbCdEf".parse::<Rgb>().unwrap(),
      "#abcdef".parse::<Rgb>().unwrap()
    );
  }

  #[test]
  fn rejects_short_and_long_input() {
    assert!(matches!(
      "#fff".parse::<Rgb>(),
      Err(ColorParseError::InvalidLength { .. })
    ));
    assert!(matches!(
      "#ff0000ff".parse::<Rgb>(),
      Err(ColorParseError::InvalidLength { .. })
    ));
  }

  #[test]
  fn rejects_non_hex_digits() {
    assert!(matches!(
      "#gg0000".parse::<Rgb>(),
      Err(ColorParseError::InvalidDigit { .. })
    ));
  }

  #[test]
  fn luminance_endpoints() {
    assert_eq!(Rgb::BLACK.relative_luminance(), 0.0);
    assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < 1e-9);
  }

  #[test]
  fn hex_round_trip() {
    let color = Rgb::new(0x12, 0xab, 0xef);
    assert_eq!(color.to_hex().parse::<Rgb>().unwrap(), color);
  }
}
