//! Per-room change-notification feed.
//!
//! Models the persistence layer's pub/sub channel: every subscriber picks a
//! room code and receives that room's state changes and ledger appends.
//! Delivery is at-least-once from the consumer's point of view; a lagged
//! receiver misses events and recovers by re-querying the ledger, so
//! consumers must be idempotent to redelivery.

use std::collections::HashMap;

use tokio::sync::{Mutex, broadcast};

use crate::domain::{Direction, ItemId, ParticipantId, RoomCode};

/// Buffered events per room channel before slow receivers start lagging.
const CHANNEL_CAPACITY: usize = 64;

/// A room-scoped event delivered to subscribers.
#[derive(Debug, Clone)]
pub enum RoomEvent {
    /// Slot B transitioned from empty to filled; the room is now Active.
    PartnerJoined { participant: ParticipantId },
    /// A swipe was appended to the ledger.
    SwipeRecorded {
        participant: ParticipantId,
        item_id: ItemId,
        direction: Direction,
    },
    /// A recorded right-swipe completed a mutual approval.
    MatchFound { item_id: ItemId },
}

/// Fan-out hub holding one broadcast channel per room code.
///
/// Channels are created lazily on first subscribe or publish and never torn
/// down; an abandoned room's channel simply stops carrying traffic.
pub struct RoomEventBus {
    channels: Mutex<HashMap<String, broadcast::Sender<RoomEvent>>>,
}

impl RoomEventBus {
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Subscribe to the event feed for one room.
    pub async fn subscribe(&self, code: &RoomCode) -> broadcast::Receiver<RoomEvent> {
        let mut channels = self.channels.lock().await;
        channels
            .entry(code.as_str().to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Publish an event on one room's feed.
    ///
    /// An event published while nobody is subscribed is dropped; late
    /// subscribers catch up through the ledger, not through replay.
    pub async fn publish(&self, code: &RoomCode, event: RoomEvent) {
        let mut channels = self.channels.lock().await;
        let sender = channels
            .entry(code.as_str().to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        let _ = sender.send(event);
    }
}

impl Default for RoomEventBus {
    fn default() -> Self {
        Self::new()
    }
}
