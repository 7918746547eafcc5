// ============================
// crates/backend-lib/src/rooms.rs
// ============================
//! In-memory registry of active group rooms.
use chrono::{DateTime, SecondsFormat, Utc};
use dashmap::{mapref::entry::Entry, DashMap};
use metrics::{counter, gauge};
use roomgate_common::RoomSummary;

use crate::error::AppError;
use crate::metrics::{ROOM_ACTIVE, ROOM_CREATED, ROOM_JOINED, ROOM_LEFT, ROOM_REMOVED};
use crate::naming::generate_room_code;

pub type RoomId = String;

/// One active group room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    /// Wallet that created the room
    pub host: String,
    /// Wallets currently in the room, in join order, without duplicates
    pub participants: Vec<String>,
    pub created: DateTime<Utc>,
}

impl Room {
    fn new(id: RoomId, host: &str) -> Self {
        Self {
            id,
            host: host.to_string(),
            participants: vec![host.to_string()],
            created: Utc::now(),
        }
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn has_participant(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }

    /// Summary as returned by join-room
    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            id: self.id.clone(),
            host: self.host.clone(),
            participant_count: self.participant_count(),
            created: None,
        }
    }

    /// Summary including the creation timestamp, as returned by room info
    pub fn detailed_summary(&self) -> RoomSummary {
        RoomSummary {
            created: Some(self.created.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ..self.summary()
        }
    }
}

/// Manager for all active group rooms.
///
/// Peer-to-peer rooms never enter the registry. Each operation holds the
/// shard lock for its room for the whole read-modify-write.
#[derive(Debug, Default)]
pub struct RoomManager {
    rooms: DashMap<RoomId, Room>,
}

impl RoomManager {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a room hosted by `host` and return its generated id
    pub fn create_room(&self, host: &str) -> RoomId {
        let room_id = generate_room_code();
        self.rooms
            .insert(room_id.clone(), Room::new(room_id.clone(), host));

        counter!(ROOM_CREATED).increment(1);
        gauge!(ROOM_ACTIVE).set(self.rooms.len() as f64);
        tracing::info!(room_id = %room_id, host = %host, "room created");

        room_id
    }

    /// Get a snapshot of a room by id
    pub fn get_room(&self, room_id: &str) -> Option<Room> {
        self.rooms.get(room_id).map(|entry| entry.value().clone())
    }

    /// Add `participant` to a room unless already present.
    ///
    /// Returns the updated room, or [`AppError::RoomNotFound`] without
    /// touching the registry.
    pub fn join_room(&self, room_id: &str, participant: &str) -> Result<Room, AppError> {
        let mut room = self.rooms.get_mut(room_id).ok_or(AppError::RoomNotFound)?;

        if !room.has_participant(participant) {
            room.participants.push(participant.to_string());
            counter!(ROOM_JOINED).increment(1);
            tracing::info!(
                room_id = %room_id,
                participant = %participant,
                participants = room.participant_count(),
                "participant joined room"
            );
        }

        Ok(room.clone())
    }

    /// Remove `participant` from a room, deleting the room once empty.
    ///
    /// Unknown rooms and participants are ignored.
    pub fn leave_room(&self, room_id: &str, participant: &str) {
        let Entry::Occupied(mut entry) = self.rooms.entry(room_id.to_string()) else {
            return;
        };

        let room = entry.get_mut();
        let before = room.participant_count();
        room.participants.retain(|p| p != participant);
        if room.participant_count() < before {
            counter!(ROOM_LEFT).increment(1);
            tracing::info!(room_id = %room_id, participant = %participant, "participant left room");
        }

        if room.participants.is_empty() {
            entry.remove();
            counter!(ROOM_REMOVED).increment(1);
            gauge!(ROOM_ACTIVE).set(self.rooms.len() as f64);
            tracing::info!(room_id = %room_id, "room removed");
        }
    }

    /// Number of registered rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
