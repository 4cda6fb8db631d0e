//! WebSocket handler for the per-room event feed.
//!
//! A subscriber upgrades on `/ws/rooms/{code}` and receives the room's
//! change notifications as JSON messages. A lagged receiver (the channel
//! buffered past it) resumes with the live feed; missed swipes are not
//! replayed and are instead reflected by re-querying the match list.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::broadcast;

use crate::{
    domain::RoomCode,
    infrastructure::dto::websocket::encode_event,
    infrastructure::events::RoomEvent,
    ui::state::AppState,
};

pub async fn room_feed_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let code = match RoomCode::new(code.clone()) {
        Ok(code) => code,
        Err(_) => {
            tracing::warn!("Invalid room code format: '{}'", code);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    // Only existing rooms carry a feed.
    if state.repository.find_room(&code).await.is_err() {
        return Err(StatusCode::NOT_FOUND);
    }

    let rx = state.events.subscribe(&code).await;
    tracing::info!("Subscriber attached to room '{}' feed", code);

    Ok(ws.on_upgrade(move |socket| forward_events(socket, code, rx)))
}

async fn forward_events(
    socket: WebSocket,
    code: RoomCode,
    mut rx: broadcast::Receiver<RoomEvent>,
) {
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            event = rx.recv() => {
                match event {
                    Ok(event) => {
                        let json = match encode_event(&event) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::error!("Failed to encode room event: {}", e);
                                continue;
                            }
                        };
                        if sender.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // The consumer catches up through the ledger.
                        tracing::warn!(
                            "Feed subscriber for room '{}' lagged by {} events",
                            code,
                            skipped
                        );
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket error on room '{}' feed: {}", code, e);
                        break;
                    }
                    // The feed is one-way; other client frames are ignored.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    tracing::info!("Subscriber detached from room '{}' feed", code);
}
