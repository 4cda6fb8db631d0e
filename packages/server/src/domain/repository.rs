//! Repository trait for rooms and the swipe ledger.
//!
//! The domain layer owns the trait; the infrastructure layer provides the
//! implementation (dependency inversion). The contract mirrors what the
//! target persistence layer must offer: a unique constraint on room codes,
//! a conditional-update primitive for slot assignment, and append-only
//! swipe storage.

use async_trait::async_trait;

use super::entity::{Room, Swipe};
use super::error::RepositoryError;
use super::value_object::{ItemId, ParticipantId, RoomCode, RoomId};

/// Outcome of an atomic slot B claim.
#[derive(Debug, Clone)]
pub enum SlotClaim {
    /// The candidate won the slot; the room is now Active.
    Claimed(Room),
    /// The room was already Active; the candidate holds no slot.
    AlreadyActive(Room),
}

/// Durable storage for rooms and the append-only swipe ledger.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Persist a new room.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::CodeTaken` when another room already holds
    /// the code (unique constraint).
    async fn insert_room(&self, room: Room) -> Result<(), RepositoryError>;

    /// Look up a room by its code.
    async fn find_room(&self, code: &RoomCode) -> Result<Room, RepositoryError>;

    /// Atomically fill slot B if and only if it is currently empty.
    ///
    /// This is the race-critical operation: of N concurrent claims on a
    /// Waiting room, exactly one may observe `Claimed`. Implementations must
    /// perform a single compare-and-set, never a read-then-write.
    async fn claim_slot_b(
        &self,
        code: &RoomCode,
        candidate: ParticipantId,
    ) -> Result<SlotClaim, RepositoryError>;

    /// Append a swipe fact to the ledger.
    ///
    /// Never fails on duplicate (participant, item) pairs; only storage
    /// unavailability is an error.
    async fn append_swipe(&self, swipe: Swipe) -> Result<(), RepositoryError>;

    /// All swipes recorded for a room, in append order.
    async fn swipes_for_room(&self, room_id: &RoomId) -> Result<Vec<Swipe>, RepositoryError>;

    /// All swipes recorded for one item in a room, in append order.
    async fn swipes_for_item(
        &self,
        room_id: &RoomId,
        item_id: &ItemId,
    ) -> Result<Vec<Swipe>, RepositoryError>;
}
