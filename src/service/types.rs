//! Request and response types for the SV table web service

use serde::{Deserialize, Serialize};

use crate::cli::JsonTable;
use crate::error::SvError;

/// Query parameters for table retrieval
#[derive(Debug, Clone, Deserialize)]
pub struct TableQuery {
    /// File to load, relative to the service data root
    pub file: String,
    /// Optional filter expression (`CHR:<name>` or substring)
    #[serde(default)]
    pub filter: Option<String>,
}

/// Successful table response: the rendered table plus the ticket generation
/// that produced it, so clients can correlate out-of-order replies.
#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub generation: u64,
    #[serde(flatten)]
    pub table: JsonTable,
}

/// Error payload returned for failed loads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}

impl ErrorResponse {
    pub fn from_error(error: &SvError) -> Self {
        Self {
            error: error.to_string(),
            status: error.status_code(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
