// src/http/restore.rs

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::http::AppState;
use crate::status::read_status;

/// Body of the status-check response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// `GET /restore/status` — report the current restore status.
///
/// Takes no parameters. The status file is re-read on every request; a
/// missing or empty file yields the sentinel default.
pub async fn check_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: read_status(state.status_file.as_ref()),
    })
}
