// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-sv web service
//!
//! Serves structural-variant call tables over HTTP.

use clap::Parser;
use ferro_sv::config::SvConfig;
use ferro_sv::service::{serve, ServiceConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ferro-sv-web")]
#[command(author, version, about = "Structural-variant call table web service")]
struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Data root directory (default: config file, then current dir)
    #[arg(long)]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let file_config = SvConfig::load().unwrap_or_default();

    let config = ServiceConfig {
        host: cli.host,
        port: cli.port,
        data_root: cli
            .root
            .or(file_config.data_root.clone())
            .unwrap_or_else(|| PathBuf::from(".")),
        link: file_config.link_template(),
    };

    serve(config).await
}
