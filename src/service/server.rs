//! Web server setup using Axum framework

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::fetch::DirSource;
use crate::link::LinkTemplate;
use crate::pipeline::Pipeline;
use crate::service::{config::ServiceConfig, handlers};
use crate::session::LoadSession;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Pipeline bound to the configured data root
    pub pipeline: Arc<Pipeline<DirSource>>,
    /// Session tracking load supersession
    pub session: Arc<LoadSession>,
    /// Browser-link template for response URLs
    pub link: Arc<LinkTemplate>,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            pipeline: Arc::new(Pipeline::new(DirSource::new(config.data_root.clone()))),
            session: Arc::new(LoadSession::new()),
            link: Arc::new(config.link.clone()),
        }
    }
}

/// Create the Axum application with all routes
pub fn create_app(config: &ServiceConfig) -> (Router, AppState) {
    let state = AppState::new(config);
    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/v1/table", get(handlers::table::get_table))
        .with_state(state.clone());
    (app, state)
}

/// Bind and serve until shutdown.
pub async fn serve(config: ServiceConfig) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let (app, _state) = create_app(&config);

    tracing::info!(%addr, root = %config.data_root.display(), "serving SV tables");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}
