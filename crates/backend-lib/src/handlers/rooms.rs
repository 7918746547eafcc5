// ============================
// crates/backend-lib/src/handlers/rooms.rs
// ============================
//! Group room handlers.
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use roomgate_common::{
    CreateRoomRequest, CreateRoomResponse, JoinRoomRequest, JoinRoomResponse, LeaveRoomRequest,
    LeaveRoomResponse, RoomInfoResponse, TokenMetadata,
};

use super::AppJson;
use crate::error::AppError;
use crate::validation::{present, require, require_pair};
use crate::AppState;

/// `POST /api/create-room`
///
/// The room is registered before the host's token is minted and stays
/// registered if issuance fails.
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateRoomRequest>,
) -> Result<Json<CreateRoomResponse>, AppError> {
    let wallet = require(req.wallet_address, "walletAddress is required")?;

    let room_id = state.rooms.create_room(&wallet);

    let metadata = TokenMetadata::group(&wallet, true).with_display_name(req.display_name);
    let token = state.tokens.issue_token(&room_id, &wallet, &metadata).await?;

    Ok(Json(CreateRoomResponse {
        success: true,
        room_id,
        token,
        livekit_url: state.settings.livekit_url.clone(),
    }))
}

/// `POST /api/join-room`
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<JoinRoomRequest>,
) -> Result<Json<JoinRoomResponse>, AppError> {
    let (room_id, wallet) = require_pair(
        req.room_id,
        req.wallet_address,
        "roomId and walletAddress are required",
    )?;

    let room = state.rooms.join_room(&room_id, &wallet)?;

    let metadata =
        TokenMetadata::group(&wallet, room.host == wallet).with_display_name(req.display_name);
    let token = state.tokens.issue_token(&room.id, &wallet, &metadata).await?;

    Ok(Json(JoinRoomResponse {
        success: true,
        token,
        livekit_url: state.settings.livekit_url.clone(),
        room: room.summary(),
    }))
}

/// `POST /api/leave-room`
///
/// Always acknowledges, even for unknown rooms, unknown participants or an
/// unreadable body.
pub async fn leave_room(
    State(state): State<Arc<AppState>>,
    body: Result<AppJson<LeaveRoomRequest>, AppError>,
) -> Json<LeaveRoomResponse> {
    match body {
        Ok(AppJson(req)) => {
            if let (Some(room_id), Some(wallet)) =
                (present(req.room_id), present(req.wallet_address))
            {
                state.rooms.leave_room(&room_id, &wallet);
            }
        },
        Err(e) => tracing::debug!(error = %e, "ignoring unreadable leave-room body"),
    }

    Json(LeaveRoomResponse { success: true })
}

/// `GET /api/room/{room_id}`
pub async fn room_info(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomInfoResponse>, AppError> {
    let room = state.rooms.get_room(&room_id).ok_or(AppError::RoomNotFound)?;

    Ok(Json(RoomInfoResponse {
        success: true,
        room: room.detailed_summary(),
    }))
}
