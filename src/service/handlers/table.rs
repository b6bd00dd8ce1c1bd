//! Table retrieval endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};

use crate::cli::JsonTable;
use crate::service::{
    server::AppState,
    types::{ErrorResponse, TableQuery, TableResponse},
};

/// Load a call file and return its filtered, derived table.
///
/// Each request begins a new load generation; a reply whose generation was
/// superseded while the load ran is still returned to its own caller, but
/// only the newest result is committed as the session's current table.
pub async fn get_table(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> Result<Json<TableResponse>, (StatusCode, Json<ErrorResponse>)> {
    let filter = query.filter.as_deref().unwrap_or("");
    let ticket = state.session.begin();

    match state.pipeline.load(&query.file, filter) {
        Ok(table) => {
            let response = TableResponse {
                generation: ticket.generation(),
                table: JsonTable::new(&table, &state.link),
            };
            if !state.session.commit(ticket, table) {
                tracing::debug!(file = %query.file, "superseded load discarded");
            }
            Ok(Json(response))
        }
        Err(e) => {
            let response = ErrorResponse::from_error(&e);
            let status = StatusCode::from_u16(response.status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status, Json(response)))
        }
    }
}
