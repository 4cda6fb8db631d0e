//! Shared application state.

use std::sync::Arc;

use crate::domain::RoomRepository;
use crate::infrastructure::RoomEventBus;

/// State shared across all handlers.
pub struct AppState {
    /// Repository (data access abstraction)
    pub repository: Arc<dyn RoomRepository>,
    /// Per-room change-notification feed
    pub events: Arc<RoomEventBus>,
}
