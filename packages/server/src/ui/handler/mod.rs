//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{create_room, get_matches, get_room, health_check, join_room, record_swipe};

// Re-export WebSocket handlers
pub use websocket::room_feed_handler;
