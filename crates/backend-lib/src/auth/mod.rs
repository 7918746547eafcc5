// ============================
// crates/backend-lib/src/auth/mod.rs
// ============================
//! Access-token issuance for the media platform.

pub mod jwt;
pub mod livekit;
mod issuer;

pub use issuer::TokenIssuer;
pub use livekit::{AccessTokenClaims, LiveKitTokenIssuer, VideoGrant};
