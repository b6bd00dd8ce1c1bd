//! Error types for ferro-sv
//!
//! A load either produces a complete table or a single terminal error; the
//! core never surfaces partial results. Short or missing columns in a data
//! line are not errors; they degrade to empty values during parsing.

use thiserror::Error;

/// Main error type for ferro-sv operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SvError {
    /// Transport failure while retrieving input bytes, carrying an
    /// HTTP-status-like code and a diagnostic body
    #[error("Fetch failed ({status}): {body}")]
    Fetch { status: u16, body: String },

    /// Input bytes are not valid UTF-8 (after any required decompression),
    /// or the gzip stream itself is corrupt
    #[error("Encoding error: {msg}")]
    Encoding { msg: String },

    /// Filename suffix is neither `.vcf`, `.vcf.gz`, nor `.bed`
    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON serialization error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl SvError {
    /// Map this error to an HTTP-like status code.
    ///
    /// Used by the web service to pick a response status and by callers
    /// that want to distinguish missing inputs from bad inputs.
    pub fn status_code(&self) -> u16 {
        match self {
            SvError::Fetch { status, .. } => *status,
            SvError::UnsupportedFormat { .. } => 415,
            SvError::Encoding { .. } => 422,
            SvError::Io { .. } | SvError::Json { .. } => 500,
        }
    }
}

impl From<std::io::Error> for SvError {
    fn from(err: std::io::Error) -> Self {
        SvError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SvError {
    fn from(err: serde_json::Error) -> Self {
        SvError::Json {
            msg: err.to_string(),
        }
    }
}
