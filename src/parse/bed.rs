//! BED data-line parsing
//!
//! BED lines carry at least chrom, start, end, and name columns. The
//! normalized record synthesizes `INFO/END` from the end column so that
//! length and link derivation work identically for both formats.

use std::collections::HashMap;

use crate::record::SvRecord;

/// Parse one BED data line into a normalized record.
///
/// The end column is carried verbatim into `INFO/END`. A degenerate
/// interval (numeric `start == end`) marks the region as an insertion via
/// `INFO/SVTYPE`; other regions carry an empty SVTYPE so the column still
/// surfaces for BED loads.
pub fn parse_bed_line(line: &str) -> SvRecord {
    let raw_fields: Vec<String> = line.split('\t').map(str::to_string).collect();
    let col = |i: usize| raw_fields.get(i).cloned().unwrap_or_default();

    let start: i64 = col(1).parse().unwrap_or(0);
    let end: i64 = col(2).parse().unwrap_or(0);

    let mut info = HashMap::new();
    if let Some(end_raw) = raw_fields.get(2) {
        info.insert("END".to_string(), vec![end_raw.clone()]);
    }
    let svtype = if start == end { "INS" } else { "" };
    info.insert("SVTYPE".to_string(), vec![svtype.to_string()]);

    SvRecord {
        chrom: col(0),
        pos: start,
        id: col(3),
        ref_allele: String::new(),
        alt: String::new(),
        qual: String::new(),
        filter_field: String::new(),
        info,
        raw_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_region() {
        let record = parse_bed_line("22\t100\t200\tregionA");
        assert_eq!(record.chrom, "22");
        assert_eq!(record.pos, 100);
        assert_eq!(record.id, "regionA");
        assert_eq!(record.info.get("END"), Some(&vec!["200".to_string()]));
        assert_eq!(record.ref_allele, "");
        assert_eq!(record.alt, "");
        assert_eq!(record.qual, "");
        assert_eq!(record.filter_field, "");
    }

    #[test]
    fn test_raw_fields_preserved() {
        let line = "22\t100\t200\tregionA\t960\t+";
        let record = parse_bed_line(line);
        assert_eq!(record.raw_fields.len(), 6);
        assert_eq!(record.raw_line(), line);
    }

    #[test]
    fn test_degenerate_interval_marks_insertion() {
        let record = parse_bed_line("22\t100\t100\tins1");
        assert_eq!(record.info_first("SVTYPE"), Some("INS"));
    }

    #[test]
    fn test_regular_interval_has_empty_svtype() {
        let record = parse_bed_line("22\t100\t200\tregionA");
        assert_eq!(record.info_first("SVTYPE"), Some(""));
    }

    #[test]
    fn test_short_line_degrades_to_empty() {
        let record = parse_bed_line("22\t100");
        assert_eq!(record.chrom, "22");
        assert_eq!(record.pos, 100);
        assert_eq!(record.id, "");
        // No end column, so no END key is synthesized
        assert!(record.info.get("END").is_none());
        assert_eq!(record.end(), 0);
    }

    #[test]
    fn test_unparseable_start_degrades_to_zero() {
        let record = parse_bed_line("22\tx\t200\tregionA");
        assert_eq!(record.pos, 0);
        assert_eq!(record.end(), 200);
    }
}
