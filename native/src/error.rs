//! Error types for CSS color parsing

use thiserror::Error;

/// The error type for color parsing and conversion.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// No grammar matched the input, or an `rgb()` channel exceeded 255.
    /// Carries the trimmed input text.
    #[error("Unhandled color format: \"{0}\"")]
    UnhandledFormat(String),

    /// A channel token did not parse as a finite number.
    #[error("Unhandled number found \"{0}\"")]
    InvalidNumber(String),

    /// Alpha exceeded 100 after normalization.
    #[error("Alpha must be a percentage btwn 0-100. Got: \"{0}\"")]
    InvalidAlpha(f64),
}

impl From<ColorError> for napi::Error {
    fn from(err: ColorError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}
