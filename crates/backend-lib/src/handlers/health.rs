// ============================
// crates/backend-lib/src/handlers/health.rs
// ============================
use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use roomgate_common::HealthResponse;

use crate::AppState;

/// `GET /`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        active_rooms: state.rooms.len(),
        livekit_connected: state.tokens.is_configured(),
    })
}
