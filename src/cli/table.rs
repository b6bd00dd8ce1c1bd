//! Table rendering for CLI output

use std::io::{self, Write};

use serde::Serialize;

use crate::link::LinkTemplate;
use crate::pipeline::{SvTable, TableRow};

use super::{shorten, DisplayMode, OutputFormat};

/// JSON payload for one rendered row.
#[derive(Debug, Serialize)]
pub struct JsonRow {
    pub chrom: String,
    pub pos: i64,
    pub id: String,
    #[serde(rename = "ref")]
    pub ref_allele: String,
    pub alt: String,
    pub qual: String,
    pub filter: String,
    pub length: i64,
    pub left: i64,
    pub right: i64,
    pub locus: String,
    pub url: String,
    pub info: Vec<(String, String)>,
    pub raw: Vec<String>,
}

/// JSON payload for a rendered table.
#[derive(Debug, Serialize)]
pub struct JsonTable {
    pub file: String,
    pub format: String,
    pub matched: usize,
    pub columns: Vec<String>,
    pub rows: Vec<JsonRow>,
}

impl JsonRow {
    fn new(row: &TableRow, columns: &[String], template: &LinkTemplate) -> Self {
        let record = &row.record;
        Self {
            chrom: record.chrom.clone(),
            pos: record.pos,
            id: record.id.clone(),
            ref_allele: record.ref_allele.clone(),
            alt: record.alt.clone(),
            qual: record.qual.clone(),
            filter: record.filter_field.clone(),
            length: row.length,
            left: row.interval.left,
            right: row.interval.right,
            locus: template.locus(&record.chrom, row.interval),
            url: template.url(&record.chrom, row.interval),
            info: columns
                .iter()
                .map(|col| (col.clone(), info_cell(row, col)))
                .collect(),
            raw: record.raw_fields.clone(),
        }
    }
}

impl JsonTable {
    /// Assemble the JSON view of a table.
    pub fn new(table: &SvTable, template: &LinkTemplate) -> Self {
        Self {
            file: table.file.clone(),
            format: table.format.to_string(),
            matched: table.matched,
            columns: table.columns.clone(),
            rows: table
                .rows
                .iter()
                .map(|row| JsonRow::new(row, &table.columns, template))
                .collect(),
        }
    }
}

/// Render a loaded table to the writer.
pub fn render_table<W: Write>(
    writer: &mut W,
    table: &SvTable,
    mode: DisplayMode,
    format: OutputFormat,
    template: &LinkTemplate,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let payload = JsonTable::new(table, template);
            serde_json::to_writer_pretty(&mut *writer, &payload)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(writer)
        }
        OutputFormat::Text => match mode {
            DisplayMode::Raw => render_raw(writer, table),
            DisplayMode::Parsed => render_parsed(writer, table, template),
        },
    }
}

const RAW_HEADER: [&str; 8] = [
    "CHROM", "START", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO",
];

fn render_raw<W: Write>(writer: &mut W, table: &SvTable) -> io::Result<()> {
    writeln!(writer, "Rows: {}", table.matched)?;
    writeln!(writer, "{}", RAW_HEADER.join("\t"))?;
    for row in &table.rows {
        let cells: Vec<&str> = (0..RAW_HEADER.len())
            .map(|i| row.record.raw_fields.get(i).map(String::as_str).unwrap_or(""))
            .collect();
        writeln!(writer, "{}", cells.join("\t"))?;
    }
    Ok(())
}

fn render_parsed<W: Write>(
    writer: &mut W,
    table: &SvTable,
    template: &LinkTemplate,
) -> io::Result<()> {
    writeln!(writer, "Rows: {}", table.matched)?;

    let mut header = vec![
        "LINK".to_string(),
        "LENGTH".to_string(),
        "ID".to_string(),
        "REF".to_string(),
        "ALT".to_string(),
        "QUAL".to_string(),
        "FILTER".to_string(),
    ];
    header.extend(table.columns.iter().cloned());
    writeln!(writer, "{}", header.join("\t"))?;

    for row in &table.rows {
        let record = &row.record;
        let mut cells = vec![
            template.locus(&record.chrom, row.interval),
            row.length.to_string(),
            record.id.clone(),
            shorten(&record.ref_allele),
            shorten(&record.alt),
            shorten(&record.qual),
            shorten(&record.filter_field),
        ];
        for col in &table.columns {
            cells.push(shorten(&info_cell(row, col)));
        }
        writeln!(writer, "{}", cells.join("\t"))?;
    }
    Ok(())
}

fn info_cell(row: &TableRow, column: &str) -> String {
    row.record
        .info
        .get(column)
        .map(|values| values.join(","))
        .unwrap_or_default()
}
