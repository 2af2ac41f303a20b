//! Error types for ulstools
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::HetuError;

/// Result type alias for ulstools operations
pub type UlsResult<T> = Result<T, UlsError>;

/// Main error type for ulstools operations
#[derive(Error, Debug)]
pub enum UlsError {
    /// A non-empty identity code failed structural or checksum validation
    #[error("invalid hetu '{input}': {reason}")]
    InvalidHetu { input: String, reason: HetuError },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UlsError {
    /// Wrap a validation failure together with the offending input.
    pub fn invalid_hetu(input: &str, reason: HetuError) -> Self {
        Self::InvalidHetu {
            input: input.to_string(),
            reason,
        }
    }
}
