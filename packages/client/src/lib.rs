//! CLI swipe client for Kinema.
//!
//! Talks to the match engine over HTTP, subscribes to the room's WebSocket
//! event feed, and assembles the local swipe deck from the movie catalog.

pub mod api;
pub mod catalog;
pub mod deck;
pub mod events;
pub mod repl;

pub use repl::{SessionContext, run_session};
