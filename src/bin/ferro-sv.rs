// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-sv CLI
//!
//! Command-line interface for browsing structural-variant call tables.

use clap::{Parser, Subcommand};
use ferro_sv::cli::{output_error, render_table, DisplayMode, OutputFormat};
use ferro_sv::config::SvConfig;
use ferro_sv::{DirSource, LinkTemplate, Pipeline};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ferro-sv")]
#[command(author, version, about = "Structural-variant call table browser")]
#[command(
    long_about = "Load VCF or BED structural-variant call files, filter the records,
and print the normalized table with derived lengths and genome-browser links.

Examples:
  ferro-sv show calls/HG002.delly.vcf
  ferro-sv show benchmark/tier1.bed --filter CHR:22
  ferro-sv show calls.vcf.gz --mode raw -f json
  ferro-sv columns calls/HG002.manta.vcf"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a call file and print its table
    Show {
        /// File to load, relative to the data root
        file: String,

        /// Filter expression: `CHR:<name>` for exact chromosome match,
        /// anything else as a raw-text substring
        #[arg(long, default_value = "")]
        filter: String,

        /// Display mode (raw or parsed)
        #[arg(long, default_value = "parsed")]
        mode: DisplayMode,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Data root directory (default: config file, then current dir)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Print the display column set for a call file
    Columns {
        /// File to load, relative to the data root
        file: String,

        /// Data root directory (default: config file, then current dir)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SvConfig::load().unwrap_or_default();

    let exit_code = match cli.command {
        Commands::Show {
            file,
            filter,
            mode,
            format,
            root,
        } => {
            let format: OutputFormat = format.parse().unwrap_or_default();
            let template = config.link_template();
            let pipeline = Pipeline::new(data_source(root, &config));
            run_show(&pipeline, &file, &filter, mode, format, &template)
        }
        Commands::Columns { file, root } => {
            let pipeline = Pipeline::new(data_source(root, &config));
            run_columns(&pipeline, &file)
        }
    };

    std::process::exit(exit_code);
}

fn data_source(flag: Option<PathBuf>, config: &SvConfig) -> DirSource {
    let root = flag
        .or_else(|| config.data_root.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    DirSource::new(root)
}

fn run_show(
    pipeline: &Pipeline<DirSource>,
    file: &str,
    filter: &str,
    mode: DisplayMode,
    format: OutputFormat,
    template: &LinkTemplate,
) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match pipeline.load(file, filter) {
        Ok(table) => {
            if render_table(&mut out, &table, mode, format, template).is_err() {
                return 1;
            }
            0
        }
        Err(e) => {
            let stderr = io::stderr();
            let mut err_out = stderr.lock();
            let _ = output_error(&mut err_out, file, &e, format);
            1
        }
    }
}

fn run_columns(pipeline: &Pipeline<DirSource>, file: &str) -> i32 {
    match pipeline.load(file, "") {
        Ok(table) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for column in &table.columns {
                if writeln!(out, "{}", column).is_err() {
                    return 1;
                }
            }
            0
        }
        Err(e) => {
            let stderr = io::stderr();
            let mut err_out = stderr.lock();
            let _ = output_error(&mut err_out, file, &e, OutputFormat::Text);
            1
        }
    }
}
