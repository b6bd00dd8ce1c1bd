//! CLI utilities for ferro-sv
//!
//! This module provides the testable functions used by the CLI binary:
//! output mode/format selection, cell shortening, table rendering, and
//! error output.

mod table;

pub use table::{render_table, JsonRow, JsonTable};

use std::io::{self, Write};
use std::str::FromStr;

use crate::error::SvError;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text table (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// Which rendition of the records to show, mirroring the raw/parsed toggle
/// of the original table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// The original tab-separated columns, untouched
    Raw,
    /// Normalized fields plus derived length and browser link (default)
    #[default]
    Parsed,
}

impl FromStr for DisplayMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "raw" => DisplayMode::Raw,
            _ => DisplayMode::Parsed,
        })
    }
}

/// Maximum display width of a table cell before truncation.
pub const CELL_WIDTH: usize = 30;

/// Shorten a cell value for display, appending `...` when truncated.
pub fn shorten(value: &str) -> String {
    if value.chars().count() > CELL_WIDTH {
        let mut out: String = value.chars().take(CELL_WIDTH).collect();
        out.push_str("...");
        out
    } else {
        value.to_string()
    }
}

/// Write a load error to the output.
pub fn output_error<W: Write>(
    writer: &mut W,
    path: &str,
    error: &SvError,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(
            writer,
            r#"{{"file": {}, "error": {}, "status": {}}}"#,
            serde_json::json!(path),
            serde_json::json!(error.to_string()),
            error.status_code()
        ),
        OutputFormat::Text => writeln!(writer, "ERROR: {} - {}", path, error),
    }
}
