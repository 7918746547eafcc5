// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const ROOM_CREATED: &str = "room.created";
pub const ROOM_JOINED: &str = "room.joined";
pub const ROOM_LEFT: &str = "room.left";
pub const ROOM_REMOVED: &str = "room.removed";
pub const ROOM_ACTIVE: &str = "room.active";
pub const CALL_STARTED: &str = "call.started";
pub const CALL_ANSWERED: &str = "call.answered";
pub const TOKEN_ISSUED: &str = "token.issued";
pub const TOKEN_FAILED: &str = "token.failed";
