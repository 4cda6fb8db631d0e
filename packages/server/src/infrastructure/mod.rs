//! Infrastructure layer: persistence implementations, the room event bus,
//! and data transfer objects for the HTTP and WebSocket surfaces.

pub mod dto;
pub mod events;
pub mod repository;

pub use events::{RoomEvent, RoomEventBus};
pub use repository::InMemoryRoomRepository;
