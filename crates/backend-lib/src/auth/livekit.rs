// ============================
// crates/backend-lib/src/auth/livekit.rs
// ============================
//! LiveKit access-token issuance.
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use metrics::counter;
use roomgate_common::TokenMetadata;
use serde::{Deserialize, Serialize};

use crate::auth::{jwt, TokenIssuer};
use crate::config::Settings;
use crate::error::AppError;
use crate::metrics::{TOKEN_FAILED, TOKEN_ISSUED};
use crate::naming::prefix_chars;

/// Characters of the identity used as display name when none is given
const DEFAULT_NAME_CHARS: usize = 8;

/// Room permissions carried by a token
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room: String,
    pub room_join: bool,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_data: bool,
}

impl VideoGrant {
    /// The grant every token from this server carries
    pub fn full_access(room: &str) -> Self {
        Self {
            room: room.to_string(),
            room_join: true,
            can_publish: true,
            can_subscribe: true,
            can_publish_data: true,
        }
    }
}

/// Claims of a LiveKit access token
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccessTokenClaims {
    /// API key
    pub iss: String,
    /// Participant identity
    pub sub: String,
    pub jti: String,
    /// Display name
    pub name: String,
    /// Serialized [`TokenMetadata`]
    pub metadata: String,
    pub nbf: i64,
    pub exp: i64,
    pub video: VideoGrant,
}

/// Issues tokens signed with the configured API key and secret
#[derive(Clone)]
pub struct LiveKitTokenIssuer {
    api_key: Option<String>,
    api_secret: Option<String>,
    ttl: Duration,
}

impl std::fmt::Debug for LiveKitTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveKitTokenIssuer")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl LiveKitTokenIssuer {
    pub fn new(api_key: Option<String>, api_secret: Option<String>, ttl: Duration) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            api_secret: api_secret.filter(|s| !s.is_empty()),
            ttl,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let (api_key, api_secret) = settings
            .credentials()
            .map(|(key, secret)| (key.to_string(), secret.to_string()))
            .unzip();
        Self::new(api_key, api_secret, Duration::from_secs(settings.token_ttl_secs))
    }

    fn build_claims(
        &self,
        api_key: &str,
        room_name: &str,
        identity: &str,
        metadata: &TokenMetadata,
    ) -> Result<AccessTokenClaims, AppError> {
        let name = metadata
            .display_name
            .clone()
            .unwrap_or_else(|| prefix_chars(identity, DEFAULT_NAME_CHARS).to_string());
        let ttl = i64::try_from(self.ttl.as_secs())
            .map_err(|_| AppError::Internal("token TTL out of range".to_string()))?;
        let nbf = Utc::now().timestamp();
        let exp = nbf
            .checked_add(ttl)
            .ok_or_else(|| AppError::Internal("token expiry out of range".to_string()))?;

        Ok(AccessTokenClaims {
            iss: api_key.to_string(),
            sub: identity.to_string(),
            jti: identity.to_string(),
            name,
            metadata: serde_json::to_string(metadata)?,
            nbf,
            exp,
            video: VideoGrant::full_access(room_name),
        })
    }
}

#[async_trait]
impl TokenIssuer for LiveKitTokenIssuer {
    async fn issue_token(
        &self,
        room_name: &str,
        identity: &str,
        metadata: &TokenMetadata,
    ) -> Result<String, AppError> {
        let (Some(api_key), Some(api_secret)) = (&self.api_key, &self.api_secret) else {
            counter!(TOKEN_FAILED).increment(1);
            return Err(AppError::Upstream(
                "LiveKit API key and secret are not configured".to_string(),
            ));
        };

        let token = self
            .build_claims(api_key, room_name, identity, metadata)
            .and_then(|claims| jwt::sign_hs256(&claims, api_secret));

        match &token {
            Ok(_) => {
                counter!(TOKEN_ISSUED).increment(1);
                tracing::debug!(room = %room_name, identity = %identity, "token issued");
            },
            Err(e) => {
                counter!(TOKEN_FAILED).increment(1);
                tracing::warn!(room = %room_name, identity = %identity, error = %e, "token issuance failed");
            },
        }

        token
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }
}
