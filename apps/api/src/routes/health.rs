use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and whether agent crews reach the provider.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let llm = if state.config.llm_api_key.is_some() {
        "online"
    } else {
        "offline"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "otic-api",
        "llm": llm
    }))
}
