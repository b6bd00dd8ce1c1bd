//! Derived per-record fields
//!
//! Variant length and the padded genome-browser interval are computed from
//! a record's start and `INFO/END` coordinates. Absent or unparseable
//! coordinates degrade to 0, so derivation never fails: a record without an
//! end yields a zero-or-negative length, which callers must accept.

use serde::{Deserialize, Serialize};

use crate::record::SvRecord;

/// A padded coordinate range for centering a genome-browser view on a
/// variant with surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInterval {
    /// Padded left bound; may be negative near coordinate 0
    pub left: i64,
    /// Padded right bound
    pub right: i64,
}

/// Variant length: `end - start`.
///
/// `end` comes from `INFO/END` (absent → 0) and `start` from the record's
/// position, so the result can be zero or negative.
pub fn variant_length(record: &SvRecord) -> i64 {
    record.end() - record.pos
}

/// Browser-link interval with one-third-of-length padding on each side:
/// `left = floor(start - length/3)`, `right = floor(end + length/3)`.
///
/// No clamping is applied; a negative `left` is a valid, expected output
/// for short variants near the start of a chromosome.
pub fn link_interval(record: &SvRecord) -> LinkInterval {
    let start = record.pos;
    let end = record.end();
    let pad = (end - start) as f64 / 3.0;
    LinkInterval {
        left: (start as f64 - pad).floor() as i64,
        right: (end as f64 + pad).floor() as i64,
    }
}
