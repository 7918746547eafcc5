// ============================
// crates/backend-lib/src/router.rs
// ============================
//! HTTP router.
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{calls, health, rooms};
use crate::AppState;

/// Create the HTTP router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/api/create-room", post(rooms::create_room))
        .route("/api/join-room", post(rooms::join_room))
        .route("/api/leave-room", post(rooms::leave_room))
        .route("/api/room/{room_id}", get(rooms::room_info))
        .route("/api/start-call", post(calls::start_call))
        .route("/api/answer-call", post(calls::answer_call))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
