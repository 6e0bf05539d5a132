pub mod color;
pub mod contrast;
pub mod error;
pub mod sanitize;

pub use color::{ColorParseError, Rgb};
pub use contrast::{contrast_ratio, has_good_contrast, suggest_text_color, ContrastReport};
pub use error::{Result, SanitizeError};
pub use sanitize::{sanitize_stylesheet, validate_and_sanitize, Validation, MAX_STYLESHEET_LEN};
