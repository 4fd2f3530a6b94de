//! Error types for ridge generation, triangulation and rendering.

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, RidgeError>;

/// Errors raised by the ridge pipeline.
///
/// Generation and triangulation only ever fail with [`RidgeError::InvalidArgument`];
/// the remaining variants come from rendering and configuration.
#[derive(Debug, Error)]
pub enum RidgeError {
    /// A precondition on the inputs did not hold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Image encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl RidgeError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument(details.into())
    }

    /// Whether this is a precondition violation.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = RidgeError::invalid_argument("width must be positive");
        assert!(err.is_invalid_argument());
        assert!(format!("{err}").contains("width must be positive"));
    }

    #[test]
    fn io_error_is_not_invalid_argument() {
        let err: RidgeError = std::io::Error::other("disk full").into();
        assert!(!err.is_invalid_argument());
        assert!(format!("{err}").contains("disk full"));
    }
}
