//! In-memory `RoomRepository` implementation.
//!
//! HashMaps behind tokio mutexes stand in for the durable store at its
//! interface boundary: a unique constraint on room codes, a conditional
//! update for slot assignment, and append-only swipe storage. Row changes
//! are published on the `RoomEventBus`, mirroring the change-notification
//! feed a real persistence layer would provide.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ItemId, ParticipantId, RepositoryError, Room, RoomCode, RoomId, RoomRepository, SlotClaim,
    Swipe,
};
use crate::infrastructure::events::{RoomEvent, RoomEventBus};

/// HashMap-backed repository with a change feed.
pub struct InMemoryRoomRepository {
    /// Rooms keyed by code; the key set is the unique constraint.
    rooms: Mutex<HashMap<String, Room>>,
    /// Append-only swipe ledger per room.
    swipes: Mutex<HashMap<RoomId, Vec<Swipe>>>,
    /// Change-notification feed (shared with the UI layer).
    events: Arc<RoomEventBus>,
}

impl InMemoryRoomRepository {
    pub fn new(events: Arc<RoomEventBus>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            swipes: Mutex::new(HashMap::new()),
            events,
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert_room(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.contains_key(room.code.as_str()) {
            return Err(RepositoryError::CodeTaken(room.code));
        }
        rooms.insert(room.code.as_str().to_string(), room);
        Ok(())
    }

    async fn find_room(&self, code: &RoomCode) -> Result<Room, RepositoryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(code.as_str())
            .cloned()
            .ok_or(RepositoryError::RoomNotFound)
    }

    async fn claim_slot_b(
        &self,
        code: &RoomCode,
        candidate: ParticipantId,
    ) -> Result<SlotClaim, RepositoryError> {
        // Check and set happen under one guard: this is the single
        // compare-and-set the join race depends on.
        let claim = {
            let mut rooms = self.rooms.lock().await;
            let room = rooms
                .get_mut(code.as_str())
                .ok_or(RepositoryError::RoomNotFound)?;
            if room.claim_slot_b(candidate) {
                SlotClaim::Claimed(room.clone())
            } else {
                SlotClaim::AlreadyActive(room.clone())
            }
        };

        if matches!(claim, SlotClaim::Claimed(_)) {
            self.events
                .publish(code, RoomEvent::PartnerJoined { participant: candidate })
                .await;
        }

        Ok(claim)
    }

    async fn append_swipe(&self, swipe: Swipe) -> Result<(), RepositoryError> {
        let code = {
            let rooms = self.rooms.lock().await;
            rooms
                .values()
                .find(|room| room.id == swipe.room_id)
                .map(|room| room.code.clone())
                .ok_or(RepositoryError::RoomNotFound)?
        };

        {
            let mut swipes = self.swipes.lock().await;
            swipes.entry(swipe.room_id).or_default().push(swipe.clone());
        }

        self.events
            .publish(
                &code,
                RoomEvent::SwipeRecorded {
                    participant: swipe.participant,
                    item_id: swipe.item_id,
                    direction: swipe.direction,
                },
            )
            .await;

        Ok(())
    }

    async fn swipes_for_room(&self, room_id: &RoomId) -> Result<Vec<Swipe>, RepositoryError> {
        let swipes = self.swipes.lock().await;
        Ok(swipes.get(room_id).cloned().unwrap_or_default())
    }

    async fn swipes_for_item(
        &self,
        room_id: &RoomId,
        item_id: &ItemId,
    ) -> Result<Vec<Swipe>, RepositoryError> {
        let swipes = self.swipes.lock().await;
        Ok(swipes
            .get(room_id)
            .map(|ledger| {
                ledger
                    .iter()
                    .filter(|s| &s.item_id == item_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
