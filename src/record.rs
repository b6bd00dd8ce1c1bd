//! Normalized record representation
//!
//! This module provides the common tabular model that both VCF and BED
//! inputs are normalized into. A record keeps the semantic fields needed
//! for derivation and filtering alongside the original tab-separated
//! columns, so raw display never depends on what the parser understood.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One genomic call or benchmark region, normalized from a VCF or BED line.
///
/// Records are immutable once constructed; each file load produces a fresh
/// sequence of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvRecord {
    /// Reference sequence name (e.g., "chr1", "22")
    pub chrom: String,

    /// 1-based start coordinate as found in the source; unparseable input
    /// degrades to 0
    pub pos: i64,

    /// Record identifier, empty when absent
    pub id: String,

    /// Reference allele (VCF-native; empty for BED)
    pub ref_allele: String,

    /// Alternate allele(s) (VCF-native; empty for BED)
    pub alt: String,

    /// Quality score, kept as the source string (VCF-native; empty for BED)
    pub qual: String,

    /// FILTER column (VCF-native; empty for BED)
    pub filter_field: String,

    /// INFO annotations: unique, case-preserving keys mapping to value
    /// sequences. Flag-only keys map to an empty vector. Contains `END`
    /// whenever an end coordinate is known.
    pub info: HashMap<String, Vec<String>>,

    /// The original ordered tab-separated columns, preserved verbatim for
    /// raw display; never mutated after creation
    pub raw_fields: Vec<String>,
}

impl SvRecord {
    /// Get the first value of an INFO key, if the key is present and has
    /// at least one value.
    pub fn info_first(&self, key: &str) -> Option<&str> {
        self.info.get(key).and_then(|v| v.first()).map(|s| s.as_str())
    }

    /// The end coordinate from `INFO/END`, degraded to 0 when absent or
    /// unparseable.
    pub fn end(&self) -> i64 {
        self.info_first("END")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Rejoin the original columns with tabs, reproducing the source line.
    pub fn raw_line(&self) -> String {
        self.raw_fields.join("\t")
    }
}

impl fmt::Display for SvRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_line())
    }
}
