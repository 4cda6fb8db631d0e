//! UseCase: room resolution by code.

use std::sync::Arc;

use crate::domain::{RepositoryError, Room, RoomCode, RoomRepository};

use super::error::ResolveRoomError;

/// Room resolution usecase.
pub struct ResolveRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl ResolveRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Resolve a code to its room view.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no room has that code
    /// * `Storage` - the persistence layer was unavailable
    pub async fn execute(&self, code: &RoomCode) -> Result<Room, ResolveRoomError> {
        self.repository.find_room(code).await.map_err(|e| match e {
            RepositoryError::RoomNotFound => ResolveRoomError::NotFound,
            other => ResolveRoomError::Storage(other),
        })
    }
}
