// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! used for communication between the `RoomGate` token server and its clients.
//! This module defines the HTTP/JSON request and response bodies and the
//! metadata payload embedded in every issued token.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/create-room`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    /// Wallet address of the hosting participant
    #[serde(default, deserialize_with = "lenient_string")]
    pub wallet_address: Option<String>,
    /// Optional display name for the host's token
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: Option<String>,
}

/// Body of `POST /api/join-room`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub room_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub wallet_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: Option<String>,
}

/// Body of `POST /api/start-call` and `POST /api/answer-call`
///
/// Both legs of a call send the same pair; which side the token is bound to
/// is decided by the endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub caller_wallet: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub callee_wallet: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: Option<String>,
}

/// Body of `POST /api/leave-room`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRoomRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub room_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub wallet_address: Option<String>,
}

/// Read an identifier field that clients may send as a string or a number.
///
/// Numbers are kept in their JSON text form. `null`, booleans, arrays and
/// objects read as absent so the handler's presence check rejects them.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Response of `GET /`
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// RFC 3339 timestamp of the response
    pub timestamp: String,
    /// Number of group rooms currently registered
    pub active_rooms: usize,
    /// Whether the server holds credentials to mint tokens
    pub livekit_connected: bool,
}

/// Response of `POST /api/create-room`
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub success: bool,
    pub room_id: String,
    pub token: String,
    pub livekit_url: String,
}

/// Room summary embedded in join-room responses
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: String,
    pub host: String,
    pub participant_count: usize,
    /// Only present on `GET /api/room/:roomId`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Response of `POST /api/join-room`
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomResponse {
    pub success: bool,
    pub token: String,
    pub livekit_url: String,
    pub room: RoomSummary,
}

/// Response of `POST /api/start-call` and `POST /api/answer-call`
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CallResponse {
    pub success: bool,
    pub token: String,
    pub room_name: String,
    pub livekit_url: String,
}

/// Response of `POST /api/leave-room`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeaveRoomResponse {
    pub success: bool,
}

/// Response of `GET /api/room/:roomId`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoomInfoResponse {
    pub success: bool,
    pub room: RoomSummary,
}

/// Body of every error response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Kind of call a token was minted for
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    /// Multi-participant room addressed by a generated code
    Group,
    /// Two-party room addressed by the canonical wallet pairing
    P2p,
}

/// Metadata payload embedded verbatim in an issued token
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    pub wallet_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_host: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_caller: Option<bool>,
    pub call_type: CallType,
}

impl TokenMetadata {
    /// Metadata for a group room participant
    pub fn group(wallet_address: &str, is_host: bool) -> Self {
        Self {
            wallet_address: wallet_address.to_string(),
            display_name: None,
            is_host: Some(is_host),
            is_caller: None,
            call_type: CallType::Group,
        }
    }

    /// Metadata for one leg of a peer-to-peer call
    pub fn p2p(wallet_address: &str, is_caller: bool) -> Self {
        Self {
            wallet_address: wallet_address.to_string(),
            display_name: None,
            is_host: None,
            is_caller: Some(is_caller),
            call_type: CallType::P2p,
        }
    }

    /// Attach an optional display name
    #[must_use]
    pub fn with_display_name(mut self, display_name: Option<String>) -> Self {
        self.display_name = display_name.filter(|name| !name.is_empty());
        self
    }
}
