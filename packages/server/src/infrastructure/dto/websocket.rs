//! WebSocket message DTOs for the room event feed.

use serde::{Deserialize, Serialize};

use crate::domain::Direction;
use crate::infrastructure::events::RoomEvent;

/// Message type enum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    PartnerJoined,
    SwipeRecorded,
    MatchFound,
}

/// Sent when slot B fills and the room becomes active
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerJoinedMessage {
    pub r#type: MessageType,
    pub participant_id: String,
}

/// Sent on every ledger append
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRecordedMessage {
    pub r#type: MessageType,
    pub participant_id: String,
    pub item_id: String,
    pub direction: Direction,
}

/// Sent when a recorded swipe completed a mutual approval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFoundMessage {
    pub r#type: MessageType,
    pub item_id: String,
}

/// Serialize a room event into its wire form.
pub fn encode_event(event: &RoomEvent) -> serde_json::Result<String> {
    match event {
        RoomEvent::PartnerJoined { participant } => serde_json::to_string(&PartnerJoinedMessage {
            r#type: MessageType::PartnerJoined,
            participant_id: participant.to_string(),
        }),
        RoomEvent::SwipeRecorded {
            participant,
            item_id,
            direction,
        } => serde_json::to_string(&SwipeRecordedMessage {
            r#type: MessageType::SwipeRecorded,
            participant_id: participant.to_string(),
            item_id: item_id.as_str().to_string(),
            direction: *direction,
        }),
        RoomEvent::MatchFound { item_id } => serde_json::to_string(&MatchFoundMessage {
            r#type: MessageType::MatchFound,
            item_id: item_id.as_str().to_string(),
        }),
    }
}
