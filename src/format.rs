//! Input format selection by filename suffix
//!
//! Format is decided by the caller-supplied filename alone, never inferred
//! from content: `.vcf` and `.vcf.gz` select VCF, `.bed` selects BED, and
//! anything else is rejected before any bytes are parsed.

use crate::error::SvError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    /// Variant Call Format
    #[serde(rename = "vcf")]
    Vcf,
    /// Browser Extensible Data format
    #[serde(rename = "bed")]
    Bed,
}

impl FileFormat {
    /// Select a format from a filename suffix.
    pub fn from_path(path: &str) -> Result<Self, SvError> {
        if path.ends_with(".vcf") || path.ends_with(".vcf.gz") {
            Ok(FileFormat::Vcf)
        } else if path.ends_with(".bed") {
            Ok(FileFormat::Bed)
        } else {
            Err(SvError::UnsupportedFormat {
                path: path.to_string(),
            })
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Vcf => write!(f, "vcf"),
            FileFormat::Bed => write!(f, "bed"),
        }
    }
}
