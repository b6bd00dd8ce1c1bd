//! Load pipeline
//!
//! Orchestrates decode → parse → (filter × derive) into a bounded table:
//! filtering always runs over the full record set, while only the first
//! [`MAX_ROWS`] passing rows are materialized. The display column set is
//! enumerated from a bounded prefix of the parsed records to keep very wide
//! INFO schemas cheap.

use serde::{Deserialize, Serialize};

use crate::decode::decode_bytes;
use crate::derive::{link_interval, variant_length, LinkInterval};
use crate::error::SvError;
use crate::fetch::ByteSource;
use crate::filter::matches;
use crate::format::FileFormat;
use crate::parse::parse;
use crate::record::SvRecord;

/// Maximum number of filtered rows materialized per load.
pub const MAX_ROWS: usize = 1000;

/// Number of leading records scanned when enumerating display columns.
pub const COLUMN_SCAN_ROWS: usize = 100;

/// One table row: a kept record with its derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// The normalized record
    pub record: SvRecord,
    /// Derived variant length (`end - start`; may be negative)
    pub length: i64,
    /// Derived padded browser-link interval
    pub interval: LinkInterval,
}

impl TableRow {
    /// The `(chrom, left, right)` triple a collaborator needs to build a
    /// browser-navigation URL.
    pub fn link_coordinates(&self) -> (&str, i64, i64) {
        (&self.record.chrom, self.interval.left, self.interval.right)
    }
}

/// The bounded result of one file load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvTable {
    /// Source path the table was loaded from
    pub file: String,
    /// Format selected from the filename suffix
    pub format: FileFormat,
    /// Filtered rows, capped at [`MAX_ROWS`], in parse order
    pub rows: Vec<TableRow>,
    /// Total number of records that passed the filter (uncapped)
    pub matched: usize,
    /// Extra INFO columns to display, sorted, `END` excluded
    pub columns: Vec<String>,
}

/// Run the core pipeline over already-fetched bytes.
///
/// The filename is used only for format selection; unsupported suffixes
/// fail before any bytes are inspected.
pub fn load_table(path: &str, bytes: &[u8], filter: &str) -> Result<SvTable, SvError> {
    let format = FileFormat::from_path(path)?;
    let text = decode_bytes(bytes)?;
    let records = parse(&text, format);

    let columns = info_columns(&records);

    let mut rows = Vec::new();
    let mut matched = 0usize;
    for record in records {
        if !matches(&record, filter) {
            continue;
        }
        matched += 1;
        if rows.len() < MAX_ROWS {
            rows.push(TableRow {
                length: variant_length(&record),
                interval: link_interval(&record),
                record,
            });
        }
    }

    tracing::debug!(
        file = path,
        %format,
        matched,
        shown = rows.len(),
        "table loaded"
    );

    Ok(SvTable {
        file: path.to_string(),
        format,
        rows,
        matched,
        columns,
    })
}

/// Union of INFO keys over the first [`COLUMN_SCAN_ROWS`] records, sorted
/// for a stable display order, with `END` removed (it is absorbed into the
/// length and link columns).
fn info_columns(records: &[SvRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records.iter().take(COLUMN_SCAN_ROWS) {
        for key in record.info.keys() {
            if key != "END" && !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns.sort();
    columns
}

/// A pipeline bound to a byte source.
///
/// Composes input retrieval with [`load_table`]; the source decides how
/// bytes are obtained (filesystem, test fixture), the pipeline everything
/// after that.
pub struct Pipeline<S> {
    source: S,
}

impl<S: ByteSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch and load one file, evaluating `filter` over every record.
    pub fn load(&self, path: &str, filter: &str) -> Result<SvTable, SvError> {
        let bytes = self.source.fetch(path)?;
        load_table(path, &bytes, filter)
    }

    /// The underlying byte source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
