//! Room coordination and match detection engine for Kinema.
//!
//! Two participants share a room identified by a short code, swipe
//! independently through a deck of movies, and are notified in real time the
//! moment both have swiped right on the same item.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{ServerConfig, run_server};
