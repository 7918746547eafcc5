// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the `RoomGate` token server.
//!
//! Issues LiveKit access tokens for group rooms (addressed by a generated
//! code and tracked in memory) and peer-to-peer calls (addressed by a
//! canonical wallet pairing, never tracked).

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod naming;
pub mod rooms;
pub mod router;
pub mod validation;

use std::sync::Arc;

use crate::auth::{LiveKitTokenIssuer, TokenIssuer};
use crate::config::Settings;
use crate::rooms::RoomManager;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Settings loaded at startup
    pub settings: Arc<Settings>,
    /// Registry of active group rooms
    pub rooms: Arc<RoomManager>,
    /// Token issuer
    pub tokens: Arc<dyn TokenIssuer>,
}

impl AppState {
    /// Create a new application state issuing tokens with the configured credentials
    pub fn new(settings: Settings) -> Self {
        let tokens = Arc::new(LiveKitTokenIssuer::from_settings(&settings));
        Self::with_issuer(settings, tokens)
    }

    /// Create a new application state with a custom token issuer
    pub fn with_issuer(settings: Settings, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self {
            settings: Arc::new(settings),
            rooms: Arc::new(RoomManager::new()),
            tokens,
        }
    }
}
