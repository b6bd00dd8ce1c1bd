//! VCF data-line parsing
//!
//! A VCF data line carries eight mandatory tab-separated columns (CHROM,
//! POS, ID, REF, ALT, QUAL, FILTER, INFO) plus optional genotype columns.
//! The INFO column is split into the record's key/value mapping here; no
//! numeric coercion is performed at this layer except for POS.

use std::collections::HashMap;

use crate::record::SvRecord;
use crate::schema::{InfoSchema, ValueKind};

/// Parse one VCF data line into a normalized record.
///
/// Short lines are tolerated: any missing column becomes an empty string.
pub fn parse_vcf_line(line: &str, schema: &InfoSchema) -> SvRecord {
    let raw_fields: Vec<String> = line.split('\t').map(str::to_string).collect();
    let col = |i: usize| raw_fields.get(i).cloned().unwrap_or_default();

    let info = parse_info(raw_fields.get(7).map(String::as_str).unwrap_or(""), schema);

    SvRecord {
        chrom: col(0),
        pos: col(1).parse().unwrap_or(0),
        id: col(2),
        ref_allele: col(3),
        alt: col(4),
        qual: col(5),
        filter_field: col(6),
        info,
        raw_fields,
    }
}

/// Split an INFO column into its key/value mapping.
///
/// Entries are `;`-separated; `KEY=VALUE` pairs keep the value as a single
/// element unless the schema declares the key list-valued, in which case
/// the value splits on `,`. Flag-only entries map to an empty vector. A
/// bare `.` (missing INFO) contributes nothing.
fn parse_info(raw: &str, schema: &InfoSchema) -> HashMap<String, Vec<String>> {
    let mut info = HashMap::new();
    for entry in raw.split(';') {
        if entry.is_empty() || entry == "." {
            continue;
        }
        match entry.split_once('=') {
            Some((key, value)) => {
                let values = match schema.kind(key) {
                    ValueKind::List => value.split(',').map(str::to_string).collect(),
                    ValueKind::Scalar => vec![value.to_string()],
                };
                info.insert(key.to_string(), values);
            }
            None => {
                info.insert(entry.to_string(), Vec::new());
            }
        }
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"##INFO=<ID=END,Number=1,Type=Integer,Description="End position">
##INFO=<ID=CIPOS,Number=2,Type=Integer,Description="Confidence interval around POS">
##INFO=<ID=IMPRECISE,Number=0,Type=Flag,Description="Imprecise">"#;

    fn schema() -> InfoSchema {
        InfoSchema::from_header(HEADER)
    }

    #[test]
    fn test_basic_line() {
        let line = "22\t100\tsv1\tA\t<DEL>\t30\tPASS\tEND=150;SVTYPE=DEL";
        let record = parse_vcf_line(line, &schema());

        assert_eq!(record.chrom, "22");
        assert_eq!(record.pos, 100);
        assert_eq!(record.id, "sv1");
        assert_eq!(record.ref_allele, "A");
        assert_eq!(record.alt, "<DEL>");
        assert_eq!(record.qual, "30");
        assert_eq!(record.filter_field, "PASS");
        assert_eq!(record.info_first("END"), Some("150"));
        assert_eq!(record.info_first("SVTYPE"), Some("DEL"));
    }

    #[test]
    fn test_raw_fields_preserved() {
        let line = "22\t100\tsv1\tA\t<DEL>\t30\tPASS\tEND=150\tGT\t0/1";
        let record = parse_vcf_line(line, &schema());
        assert_eq!(record.raw_fields.len(), 10);
        assert_eq!(record.raw_line(), line);
    }

    #[test]
    fn test_list_valued_info_splits_on_comma() {
        let line = "22\t100\t.\tA\t<DEL>\t.\tPASS\tCIPOS=-10,10;END=200";
        let record = parse_vcf_line(line, &schema());
        assert_eq!(
            record.info.get("CIPOS"),
            Some(&vec!["-10".to_string(), "10".to_string()])
        );
        // Scalar keys keep commas intact
        assert_eq!(record.info.get("END"), Some(&vec!["200".to_string()]));
    }

    #[test]
    fn test_undeclared_key_stays_single_valued() {
        let line = "22\t100\t.\tA\tT\t.\t.\tWEIRD=a,b,c";
        let record = parse_vcf_line(line, &schema());
        assert_eq!(record.info.get("WEIRD"), Some(&vec!["a,b,c".to_string()]));
    }

    #[test]
    fn test_flag_key_has_empty_values() {
        let line = "22\t100\t.\tA\t<INS>\t.\t.\tIMPRECISE;END=100";
        let record = parse_vcf_line(line, &schema());
        assert_eq!(record.info.get("IMPRECISE"), Some(&Vec::new()));
    }

    #[test]
    fn test_missing_info_dot() {
        let line = "22\t100\t.\tA\tT\t.\t.\t.";
        let record = parse_vcf_line(line, &schema());
        assert!(record.info.is_empty());
    }

    #[test]
    fn test_short_line_degrades_to_empty() {
        let record = parse_vcf_line("22\t100", &schema());
        assert_eq!(record.chrom, "22");
        assert_eq!(record.pos, 100);
        assert_eq!(record.id, "");
        assert_eq!(record.filter_field, "");
        assert!(record.info.is_empty());
        assert_eq!(record.raw_fields.len(), 2);
    }

    #[test]
    fn test_unparseable_pos_degrades_to_zero() {
        let record = parse_vcf_line("22\tnot-a-number\t.\tA\tT\t.\t.\t.", &schema());
        assert_eq!(record.pos, 0);
    }
}
