//! Line parsing into normalized records
//!
//! Converts decoded text into an ordered sequence of [`SvRecord`]s. The
//! format is chosen by filename suffix upstream, never inferred from
//! content. Comment/header lines (`#`-prefixed) and blank lines are
//! excluded from the record sequence; for VCF, the header block instead
//! feeds the INFO schema used to split list-valued fields.
//!
//! A malformed or short data line never aborts the parse: columns that are
//! missing surface as empty values on the record.

mod bed;
mod vcf;

pub use bed::parse_bed_line;
pub use vcf::parse_vcf_line;

use crate::format::FileFormat;
use crate::record::SvRecord;
use crate::schema::InfoSchema;

/// Parse decoded text into records according to `format`.
///
/// The returned sequence contains exactly one record per non-blank,
/// non-comment input line, in input order.
pub fn parse(text: &str, format: FileFormat) -> Vec<SvRecord> {
    match format {
        FileFormat::Vcf => parse_vcf(text),
        FileFormat::Bed => parse_bed(text),
    }
}

fn parse_vcf(text: &str) -> Vec<SvRecord> {
    let header: String = text
        .lines()
        .filter(|line| line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");
    let schema = InfoSchema::from_header(&header);

    data_lines(text)
        .map(|line| parse_vcf_line(line, &schema))
        .collect()
}

fn parse_bed(text: &str) -> Vec<SvRecord> {
    // BED has no header block; `#` lines are plain comments
    data_lines(text).map(parse_bed_line).collect()
}

fn data_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter(|line| !line.starts_with('#') && !line.is_empty())
}
