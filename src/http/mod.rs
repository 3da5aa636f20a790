// src/http/mod.rs

//! HTTP request layer.
//!
//! Thin axum handlers over the gateway core. Each request is handled
//! independently; the only shared state is the immutable [`AppState`]. All
//! failures are absorbed into well-formed JSON bodies, so handlers always
//! answer `200 OK` with `Content-Type: application/json`.

pub mod restore;
pub mod settings;

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ConfigFile;
use crate::gateway::CommandGateway;

/// Shared, immutable per-server state.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CommandGateway>,
    pub status_file: Arc<PathBuf>,
}

impl AppState {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        AppState {
            gateway: Arc::new(CommandGateway::new(&cfg.backup.save_script)),
            status_file: Arc::new(cfg.backup.status_file.clone()),
        }
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/restore/status", get(restore::check_status))
        .route("/settings/save", get(settings::save_settings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
