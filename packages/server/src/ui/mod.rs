//! HTTP and WebSocket surface of the match engine.

mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{ServerConfig, run_server};
