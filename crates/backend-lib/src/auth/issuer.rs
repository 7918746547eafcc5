// ============================
// crates/backend-lib/src/auth/issuer.rs
// ============================
use async_trait::async_trait;
use roomgate_common::TokenMetadata;

use crate::error::AppError;

/// Mints access tokens for the media platform.
///
/// Every token grants join, publish, subscribe and publish-data on exactly
/// one room.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Issue a token binding `identity` to `room_name`, embedding `metadata`
    async fn issue_token(
        &self,
        room_name: &str,
        identity: &str,
        metadata: &TokenMetadata,
    ) -> Result<String, AppError>;

    /// Whether credentials are present to mint tokens at all
    fn is_configured(&self) -> bool;
}
