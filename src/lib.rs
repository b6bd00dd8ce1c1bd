// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-sv: structural-variant call tables
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Ingests structural-variant call files in VCF and BED formats, normalizes
//! them into a common tabular model, and supports filtering and
//! genome-browser link generation.
//!
//! # Example
//!
//! ```
//! use ferro_sv::load_table;
//!
//! let vcf = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
//!            22\t100\tsv1\tA\t<DEL>\t30\tPASS\tEND=150;SVTYPE=DEL\n";
//!
//! let table = load_table("calls.vcf", vcf.as_bytes(), "CHR:22").unwrap();
//! assert_eq!(table.rows.len(), 1);
//! assert_eq!(table.rows[0].length, 50);
//!
//! let (chrom, left, right) = table.rows[0].link_coordinates();
//! println!("browse {} from {} to {}", chrom, left, right);
//! ```

pub mod cli;
pub mod config;
pub mod decode;
pub mod derive;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod format;
pub mod link;
pub mod parse;
pub mod pipeline;
pub mod record;
pub mod schema;
#[cfg(feature = "web-service")]
pub mod service;
pub mod session;

// Re-export commonly used types
pub use decode::decode_bytes;
pub use derive::{link_interval, variant_length, LinkInterval};
pub use error::SvError;
pub use fetch::{ByteSource, DirSource};
pub use filter::matches;
pub use format::FileFormat;
pub use link::LinkTemplate;
pub use parse::parse;
pub use pipeline::{load_table, Pipeline, SvTable, TableRow, COLUMN_SCAN_ROWS, MAX_ROWS};
pub use record::SvRecord;
pub use schema::{InfoSchema, ValueKind};
pub use session::{LoadSession, LoadTicket};

/// Result type alias for ferro-sv operations
pub type Result<T> = std::result::Result<T, SvError>;
