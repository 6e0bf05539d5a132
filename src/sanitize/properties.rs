//! Property allow-list
//!
//! The injection context is a `<style>` block scoped to profile class names,
//! so the allow-list is limited to cosmetic properties: colors, spacing,
//! typography, borders, shadows, transforms, and positioning. Anything that
//! can fetch, execute, or escape that context never reaches output.
//!
//! Custom properties (`--*`) pass the allow-list by prefix; they still go
//! through the dangerous-substring and value checks like everything else.

/// Substrings that disqualify a property name outright
///
/// Checked before the allow-list so that legacy script-bearing properties
/// (`behavior`, `-moz-binding`, IE `expression`) and anything import-shaped
/// are dropped even when smuggled into a custom property name.
pub const DANGEROUS_PROPERTY_SUBSTRINGS: &[&str] =
  &["behavior", "-moz-binding", "expression", "filter", "import"];

/// Returns the dangerous substring a property name contains, if any
///
/// Expects the name already lowercased and trimmed.
pub fn dangerous_property(name: &str) -> Option<&'static str> {
  DANGEROUS_PROPERTY_SUBSTRINGS
    .iter()
    .copied()
    .find(|needle| name.contains(needle))
}

/// Whether a (lowercased, trimmed) property name is on the cosmetic allow-list
///
/// Custom properties are handled by the caller via the `--` prefix; this
/// function only knows the closed set.
pub fn is_allowed_property(name: &str) -> bool {
  matches!(
    name,
    // Color
    "color"
      | "opacity"
      // Background
      | "background"
      | "background-color"
      | "background-image"
      | "background-position"
      | "background-repeat"
      | "background-size"
      // Spacing
      | "margin"
      | "margin-top"
      | "margin-right"
      | "margin-bottom"
      | "margin-left"
      | "padding"
      | "padding-top"
      | "padding-right"
      | "padding-bottom"
      | "padding-left"
      // Sizing
      | "width"
      | "height"
      | "min-width"
      | "min-height"
      | "max-width"
      | "max-height"
      // Typography
      | "font"
      | "font-family"
      | "font-size"
      | "font-style"
      | "font-weight"
      | "line-height"
      | "letter-spacing"
      | "text-align"
      | "text-decoration"
      | "text-transform"
      | "text-shadow"
      // Borders and shadows
      | "border"
      | "border-color"
      | "border-style"
      | "border-width"
      | "border-radius"
      | "box-shadow"
      // Transforms
      | "transform"
      | "transform-origin"
      | "transition"
      // Positioning
      | "position"
      | "top"
      | "right"
      | "bottom"
      | "left"
      | "z-index"
  )
}
