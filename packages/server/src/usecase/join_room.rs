//! UseCase: joining a room.
//!
//! The race-critical operation. A candidate identity is minted up front and
//! offered to the repository's atomic slot claim; of N concurrent joiners on
//! a Waiting room, exactly one wins slot B. Everyone who arrives after the
//! room is Active becomes a spectator: they receive the room's current state
//! but hold no ledger identity and cannot swipe.

use std::sync::Arc;

use crate::domain::{
    ParticipantId, ParticipantIdFactory, RepositoryError, Room, RoomCode, RoomRepository,
    SlotClaim,
};

use super::error::JoinRoomError;

/// Outcome of a join attempt.
#[derive(Debug, Clone)]
pub enum JoinOutcome {
    /// The caller won slot B and may write to the ledger.
    Joined {
        participant_id: ParticipantId,
        room: Room,
    },
    /// The room was already Active; the caller observes without swiping.
    Spectator { room: Room },
}

/// Room join usecase.
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Attempt to join the room behind `code`.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no room has that code
    /// * `Storage` - the persistence layer was unavailable
    pub async fn execute(&self, code: &RoomCode) -> Result<JoinOutcome, JoinRoomError> {
        let candidate = ParticipantIdFactory::generate();

        let claim = self
            .repository
            .claim_slot_b(code, candidate)
            .await
            .map_err(|e| match e {
                RepositoryError::RoomNotFound => JoinRoomError::NotFound,
                other => JoinRoomError::Storage(other),
            })?;

        match claim {
            SlotClaim::Claimed(room) => {
                tracing::info!("Participant '{}' filled slot B of room '{}'", candidate, code);
                Ok(JoinOutcome::Joined {
                    participant_id: candidate,
                    room,
                })
            }
            SlotClaim::AlreadyActive(room) => {
                tracing::info!("Room '{}' already active, joiner becomes spectator", code);
                Ok(JoinOutcome::Spectator { room })
            }
        }
    }
}
