//! Color math for malitrack.
//!
//! Provides the HSL value type used by every theme color, conversion
//! between hex RGB and HSL, and the contrast helper used when deriving
//! readable foregrounds.

mod convert;
mod hsl;

pub use convert::{hex_to_hsl, hsl_str_to_hex};
pub use hsl::{high_contrast_foreground, HslColor};

use thiserror::Error;

/// Failure to interpret a textual color value.
///
/// Both variants are recoverable input-validation errors: callers at the
/// picker boundary fall back to a defined color instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    /// Input did not match `#RRGGBB`.
    #[error("invalid hex color '{0}', expected #RRGGBB")]
    InvalidHex(String),
    /// Input did not match `H S% L%`.
    #[error("invalid HSL color '{0}', expected 'H S% L%'")]
    InvalidHsl(String),
}
