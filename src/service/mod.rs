//! Web service for browsing structural-variant call tables
//!
//! Serves the same tables the CLI renders, over HTTP, standing in for the
//! original browser UI: the client selects a file and a filter, the service
//! replies with the capped, derived table as JSON. Enabled by the
//! `web-service` cargo feature.

pub mod config;
pub mod handlers;
pub mod server;
pub mod types;

pub use config::ServiceConfig;
pub use server::{create_app, serve, AppState};
