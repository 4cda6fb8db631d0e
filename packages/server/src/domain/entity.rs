//! Core domain models for the match engine.

use serde::{Deserialize, Serialize};

use super::value_object::{Direction, ItemId, ParticipantId, RoomCode, RoomId, Timestamp};

/// A room pairing two participants for a swipe session.
///
/// Invariant: at most two occupied slots. The code is immutable after
/// creation. A room with both slots filled is Active, otherwise Waiting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Internal stable identifier
    pub id: RoomId,
    /// Human-shareable code
    pub code: RoomCode,
    /// Content-source tags the deck must be filtered to (non-empty)
    pub allowed_sources: Vec<String>,
    /// First participant slot, filled at creation
    pub slot_a: Option<ParticipantId>,
    /// Second participant slot, filled by the winning joiner
    pub slot_b: Option<ParticipantId>,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new Waiting room with slot A held by the creator.
    pub fn new(
        id: RoomId,
        code: RoomCode,
        allowed_sources: Vec<String>,
        creator: ParticipantId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            code,
            allowed_sources,
            slot_a: Some(creator),
            slot_b: None,
            created_at,
        }
    }

    /// A room is active once both slots are occupied.
    pub fn is_active(&self) -> bool {
        self.slot_a.is_some() && self.slot_b.is_some()
    }

    /// Whether the given participant occupies one of the two slots.
    pub fn is_occupant(&self, participant: &ParticipantId) -> bool {
        self.slot_a.as_ref() == Some(participant) || self.slot_b.as_ref() == Some(participant)
    }

    /// Fill slot B if it is currently empty.
    ///
    /// Returns `true` when the candidate claimed the slot. Callers must run
    /// this under the store's write guard so it acts as a single
    /// compare-and-set, never a read-then-write across two lock scopes.
    pub fn claim_slot_b(&mut self, candidate: ParticipantId) -> bool {
        if self.slot_b.is_some() {
            return false;
        }
        self.slot_b = Some(candidate);
        true
    }
}

/// An immutable swipe fact in the append-only ledger.
///
/// Never updated or deleted. Duplicate (participant, item) pairs may occur
/// and are tolerated; match derivation only asks whether a participant has
/// ever swiped right on an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swipe {
    /// Room the swipe belongs to
    pub room_id: RoomId,
    /// Participant who swiped
    pub participant: ParticipantId,
    /// Item that was swiped
    pub item_id: ItemId,
    /// Swipe direction
    pub direction: Direction,
    /// Timestamp when the swipe was recorded
    pub recorded_at: Timestamp,
}

impl Swipe {
    /// Create a new swipe fact.
    pub fn new(
        room_id: RoomId,
        participant: ParticipantId,
        item_id: ItemId,
        direction: Direction,
        recorded_at: Timestamp,
    ) -> Self {
        Self {
            room_id,
            participant,
            item_id,
            direction,
            recorded_at,
        }
    }
}
