//! UseCase: room creation.
//!
//! Mints a room code and the creator's participant identity, then persists
//! a Waiting room with slot A filled. Code uniqueness is enforced by the
//! repository's unique constraint; on collision this usecase retries with a
//! fresh mint instead of failing the creation.

use std::sync::Arc;

use kinema_shared::time::now_utc_millis;

use crate::domain::{
    ParticipantId, ParticipantIdFactory, RepositoryError, Room, RoomCode, RoomCodeFactory, RoomId,
    RoomRepository, Timestamp,
};

use super::error::CreateRoomError;

/// Bounded retry budget for code-space collisions.
pub const MAX_MINT_ATTEMPTS: usize = 5;

/// Result of a successful room creation.
#[derive(Debug, Clone)]
pub struct CreatedRoom {
    pub code: RoomCode,
    pub participant_id: ParticipantId,
}

/// Room creation usecase.
pub struct CreateRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl CreateRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Create a Waiting room filtered to the given content sources.
    ///
    /// # Errors
    ///
    /// * `NoSourcesSelected` - the filter was empty
    /// * `ExhaustedRetries` - every minted code collided
    /// * `Storage` - the persistence layer was unavailable
    pub async fn execute(
        &self,
        allowed_sources: Vec<String>,
    ) -> Result<CreatedRoom, CreateRoomError> {
        if allowed_sources.is_empty() {
            return Err(CreateRoomError::NoSourcesSelected);
        }

        let participant_id = ParticipantIdFactory::generate();

        for attempt in 1..=MAX_MINT_ATTEMPTS {
            let code = RoomCodeFactory::generate();
            let room = Room::new(
                RoomId::generate(),
                code.clone(),
                allowed_sources.clone(),
                participant_id,
                Timestamp::new(now_utc_millis()),
            );

            match self.repository.insert_room(room).await {
                Ok(()) => {
                    tracing::info!("Created room '{}' (attempt {})", code, attempt);
                    return Ok(CreatedRoom {
                        code,
                        participant_id,
                    });
                }
                Err(RepositoryError::CodeTaken(code)) => {
                    tracing::warn!("Room code '{}' collided, reminting", code);
                }
                Err(e) => return Err(CreateRoomError::Storage(e)),
            }
        }

        Err(CreateRoomError::ExhaustedRetries {
            attempts: MAX_MINT_ATTEMPTS,
        })
    }
}
