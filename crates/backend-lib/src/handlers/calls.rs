// ============================
// crates/backend-lib/src/handlers/calls.rs
// ============================
//! Peer-to-peer call handlers.
//!
//! Calls never touch the room registry: both legs derive the same room name
//! from the wallet pair and receive tokens for it independently.
use std::sync::Arc;

use axum::{extract::State, Json};
use metrics::counter;
use roomgate_common::{CallRequest, CallResponse, TokenMetadata};

use super::AppJson;
use crate::error::AppError;
use crate::metrics::{CALL_ANSWERED, CALL_STARTED};
use crate::naming::p2p_room_name;
use crate::validation::require_pair;
use crate::AppState;

/// Which side of the call the token is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallLeg {
    Caller,
    Callee,
}

/// `POST /api/start-call`
pub async fn start_call(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CallRequest>,
) -> Result<Json<CallResponse>, AppError> {
    issue_call_token(&state, req, CallLeg::Caller).await
}

/// `POST /api/answer-call`
pub async fn answer_call(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CallRequest>,
) -> Result<Json<CallResponse>, AppError> {
    issue_call_token(&state, req, CallLeg::Callee).await
}

async fn issue_call_token(
    state: &AppState,
    req: CallRequest,
    leg: CallLeg,
) -> Result<Json<CallResponse>, AppError> {
    let (caller, callee) = require_pair(
        req.caller_wallet,
        req.callee_wallet,
        "callerWallet and calleeWallet are required",
    )?;

    let room_name = p2p_room_name(&caller, &callee);
    let identity = match leg {
        CallLeg::Caller => &caller,
        CallLeg::Callee => &callee,
    };

    let metadata = TokenMetadata::p2p(identity, leg == CallLeg::Caller)
        .with_display_name(req.display_name);
    let token = state.tokens.issue_token(&room_name, identity, &metadata).await?;

    match leg {
        CallLeg::Caller => {
            counter!(CALL_STARTED).increment(1);
            tracing::info!(room = %room_name, caller = %caller, callee = %callee, "call started");
        },
        CallLeg::Callee => {
            counter!(CALL_ANSWERED).increment(1);
            tracing::info!(room = %room_name, caller = %caller, callee = %callee, "call answered");
        },
    }

    Ok(Json(CallResponse {
        success: true,
        token,
        room_name,
        livekit_url: state.settings.livekit_url.clone(),
    }))
}
