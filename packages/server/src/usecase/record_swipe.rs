//! UseCase: recording a swipe.
//!
//! Appends an immutable fact to the ledger and, for right-swipes, evaluates
//! match derivation for that item against the ledger. A completed match is
//! published on the room's feed and reported in the ack, so the swiping
//! client can surface it without waiting for its own event echo.

use std::sync::Arc;

use kinema_shared::time::now_utc_millis;

use crate::domain::{
    Direction, ItemId, ParticipantId, RepositoryError, RoomCode, RoomRepository, Swipe, Timestamp,
    is_match,
};
use crate::infrastructure::events::{RoomEvent, RoomEventBus};

use super::error::RecordSwipeError;

/// Acknowledgement of a recorded swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeAck {
    /// Whether this swipe completed a mutual approval.
    pub matched: bool,
}

/// Swipe recording usecase.
pub struct RecordSwipeUseCase {
    repository: Arc<dyn RoomRepository>,
    events: Arc<RoomEventBus>,
}

impl RecordSwipeUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, events: Arc<RoomEventBus>) -> Self {
        Self { repository, events }
    }

    /// Record one directional decision.
    ///
    /// Duplicate (participant, item) swipes are appended as-is; derivation
    /// treats them idempotently.
    ///
    /// # Errors
    ///
    /// * `RoomNotFound` - no room has that code
    /// * `NotAParticipant` - the writer occupies neither slot
    /// * `WriteFailure` - transient storage failure; the session continues
    pub async fn execute(
        &self,
        code: &RoomCode,
        participant: ParticipantId,
        item_id: ItemId,
        direction: Direction,
    ) -> Result<SwipeAck, RecordSwipeError> {
        let room = self.repository.find_room(code).await.map_err(|e| match e {
            RepositoryError::RoomNotFound => RecordSwipeError::RoomNotFound,
            other => RecordSwipeError::WriteFailure(other),
        })?;

        if !room.is_occupant(&participant) {
            return Err(RecordSwipeError::NotAParticipant(participant.to_string()));
        }

        let swipe = Swipe::new(
            room.id,
            participant,
            item_id.clone(),
            direction,
            Timestamp::new(now_utc_millis()),
        );
        self.repository
            .append_swipe(swipe)
            .await
            .map_err(RecordSwipeError::WriteFailure)?;

        // Left swipes can never complete a match; skip the ledger read.
        if direction == Direction::Left {
            return Ok(SwipeAck { matched: false });
        }

        // A detector run may race the partner's most recent swipe and see a
        // false negative; the partner's own append re-runs the check, so the
        // result self-corrects on the next event.
        let item_swipes = self
            .repository
            .swipes_for_item(&room.id, &item_id)
            .await
            .map_err(RecordSwipeError::WriteFailure)?;
        let matched = is_match(&room, &item_id, &item_swipes);

        if matched {
            tracing::info!("Room '{}' matched on item '{}'", code, item_id);
            self.events
                .publish(code, RoomEvent::MatchFound { item_id })
                .await;
        }

        Ok(SwipeAck { matched })
    }
}
