//! HTTP API request/response DTOs for the match engine.

use serde::{Deserialize, Serialize};

use kinema_shared::time::timestamp_to_rfc3339;

use crate::domain::Room;

/// Request body for room creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    /// Content-source tags the deck must be filtered to (non-empty)
    pub allowed_sources: Vec<String>,
}

/// Response body for room creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreatedDto {
    pub code: String,
    pub participant_id: String,
}

/// Room view returned by resolve and join endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    pub code: String,
    pub allowed_sources: Vec<String>,
    /// "waiting" or "active"
    pub state: String,
    pub created_at: String, // ISO 8601
}

impl RoomDto {
    pub fn from_room(room: &Room) -> Self {
        Self {
            code: room.code.as_str().to_string(),
            allowed_sources: room.allowed_sources.clone(),
            state: if room.is_active() {
                "active".to_string()
            } else {
                "waiting".to_string()
            },
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}

/// Response body for the join endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum JoinResponseDto {
    /// The caller won slot B and may write to the ledger
    Joined { participant_id: String, room: RoomDto },
    /// The room was already active; the caller observes but cannot swipe
    Spectator { room: RoomDto },
}

/// Request body for recording a swipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRequest {
    pub participant_id: String,
    pub item_id: String,
    /// "left" or "right"
    pub direction: String,
}

/// Response body for a recorded swipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeAckDto {
    /// Whether this swipe completed a mutual approval
    pub matched: bool,
}

/// Response body for the match list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchListDto {
    /// Matched item ids, sorted
    pub items: Vec<String>,
}
