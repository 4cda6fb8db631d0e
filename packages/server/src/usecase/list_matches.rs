//! UseCase: listing a room's matches.
//!
//! Matches are derived fresh from the ledger on every call; nothing is
//! cached, so the answer is always consistent with whatever the ledger
//! contains at read time.

use std::sync::Arc;

use crate::domain::{ItemId, RepositoryError, RoomCode, RoomRepository, all_matches};

use super::error::ListMatchesError;

/// Match listing usecase.
pub struct ListMatchesUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl ListMatchesUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// All matched items for the room, sorted by item id.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no room has that code
    /// * `Storage` - the persistence layer was unavailable
    pub async fn execute(&self, code: &RoomCode) -> Result<Vec<ItemId>, ListMatchesError> {
        let room = self.repository.find_room(code).await.map_err(|e| match e {
            RepositoryError::RoomNotFound => ListMatchesError::NotFound,
            other => ListMatchesError::Storage(other),
        })?;

        let swipes = self
            .repository
            .swipes_for_room(&room.id)
            .await
            .map_err(ListMatchesError::Storage)?;

        Ok(all_matches(&room, &swipes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;
    use crate::infrastructure::RoomEventBus;
    use crate::infrastructure::repository::InMemoryRoomRepository;
    use crate::usecase::{
        CreateRoomUseCase, JoinOutcome, JoinRoomUseCase, RecordSwipeUseCase,
    };

    #[tokio::test]
    async fn test_list_matches_derives_from_ledger() {
        // given: an active room where both sides liked item "7"
        let events = Arc::new(RoomEventBus::new());
        let repository = Arc::new(InMemoryRoomRepository::new(events.clone()));
        let created = CreateRoomUseCase::new(repository.clone())
            .execute(vec!["Netflix".to_string()])
            .await
            .unwrap();
        let partner = match JoinRoomUseCase::new(repository.clone())
            .execute(&created.code)
            .await
            .unwrap()
        {
            JoinOutcome::Joined { participant_id, .. } => participant_id,
            JoinOutcome::Spectator { .. } => unreachable!(),
        };

        let swipes = RecordSwipeUseCase::new(repository.clone(), events);
        for participant in [created.participant_id, partner] {
            swipes
                .execute(
                    &created.code,
                    participant,
                    ItemId::new("7".to_string()).unwrap(),
                    Direction::Right,
                )
                .await
                .unwrap();
        }

        // when:
        let matches = ListMatchesUseCase::new(repository)
            .execute(&created.code)
            .await
            .unwrap();

        // then:
        assert_eq!(matches, vec![ItemId::new("7".to_string()).unwrap()]);
    }

    #[tokio::test]
    async fn test_list_matches_unknown_room_fails() {
        // given:
        let repository = Arc::new(InMemoryRoomRepository::new(Arc::new(RoomEventBus::new())));
        let usecase = ListMatchesUseCase::new(repository);

        // when:
        let result = usecase
            .execute(&RoomCode::new("MAKO42".to_string()).unwrap())
            .await;

        // then:
        assert_eq!(result.unwrap_err(), ListMatchesError::NotFound);
    }
}
