// src/http/settings.rs

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;

use crate::gateway::{RequestParams, SaveSettingsParams};
use crate::http::AppState;

/// `GET /settings/save` — forward the submitted settings to the
/// save-settings script and relay its output.
///
/// The query is decoded as raw pairs rather than a typed struct so repeated
/// keys (multi-valued form fields) survive decoding. The body is either the
/// script's stdout verbatim or the gateway's error envelope; both are
/// labelled as JSON and returned with status 200.
pub async fn save_settings(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let params = RequestParams::from_pairs(pairs);
    let settings = SaveSettingsParams::from_request(&params);
    let envelope = state.gateway.invoke(&settings).await;

    (
        [(header::CONTENT_TYPE, "application/json")],
        envelope.into_body(),
    )
}
