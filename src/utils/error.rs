//! Error handling for texmd2gfm
//!
//! The rewriting passes themselves never fail: constructs they do not
//! recognize are passed through unchanged. Errors only come from the
//! edges of a run (reading input, parsing options, writing reports).

use std::path::PathBuf;

use thiserror::Error;

/// Conversion error type
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The named input file could not be opened or read
    #[error("Cannot read input file '{}': {}", path.display(), source)]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The `--label-type` value is not one of `tag`, `quadd:<n>` or `p`
    #[error("Unsupported --label-type '{value}': {reason}")]
    InvalidLabelType { value: String, reason: String },
    /// IO error (reading stdin, writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The equation map could not be serialized
    #[error("Could not serialize equation map: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn input_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConversionError::InputNotFound {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_label_type(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConversionError::InvalidLabelType {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
