//! Server runner: router construction and graceful serving.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::infrastructure::{InMemoryRoomRepository, RoomEventBus};
use crate::ui::handler;
use crate::ui::state::AppState;

use super::signal;

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Build the application router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route("/api/rooms", post(handler::create_room))
        .route("/api/rooms/{code}", get(handler::get_room))
        .route("/api/rooms/{code}/join", post(handler::join_room))
        .route("/api/rooms/{code}/swipes", post(handler::record_swipe))
        .route("/api/rooms/{code}/matches", get(handler::get_matches))
        .route("/ws/rooms/{code}", get(handler::room_feed_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until shutdown is signalled.
pub async fn run_server(config: ServerConfig) -> Result<(), std::io::Error> {
    let events = Arc::new(RoomEventBus::new());
    let repository = Arc::new(InMemoryRoomRepository::new(events.clone()));
    let state = Arc::new(AppState { repository, events });

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await
}
