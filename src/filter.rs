//! Record filtering
//!
//! A filter expression is either a chromosome selector (`CHR:` prefix,
//! exact match against the record's chromosome) or a free-text substring
//! tested against the record's rejoined raw columns, so a text filter can
//! match any raw column value, INFO blobs included. Filtering is stateless
//! and per-record; records that pass keep their original parse order.

use crate::record::SvRecord;

/// Prefix selecting exact-chromosome filtering.
const CHROM_PREFIX: &str = "CHR:";

/// Evaluate a filter expression against one record.
///
/// The empty expression matches every record.
pub fn matches(record: &SvRecord, filter: &str) -> bool {
    if let Some(wanted) = filter.strip_prefix(CHROM_PREFIX) {
        chrom_eq(&record.chrom, wanted)
    } else {
        record.raw_line().contains(filter)
    }
}

/// Chromosome comparison: exact string equality, falling back to numeric
/// equality so that `22` matches a numeric chromosome token regardless of
/// formatting (`022`, ` 22`).
fn chrom_eq(chrom: &str, wanted: &str) -> bool {
    if chrom == wanted {
        return true;
    }
    match (chrom.trim().parse::<i64>(), wanted.trim().parse::<i64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
