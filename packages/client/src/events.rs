//! Room event feed over WebSocket.

use futures_util::StreamExt;
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, warn};

/// Events the server pushes on a room's feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FeedEvent {
    PartnerJoined {
        participant_id: String,
    },
    SwipeRecorded {
        participant_id: String,
        item_id: String,
        direction: String,
    },
    MatchFound {
        item_id: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to connect to room feed: {0}")]
    Connect(#[from] tokio_tungstenite::tungstenite::Error),
}

/// Connect to the room feed and stream its events through a channel.
/// The channel closes when the server drops the connection.
pub async fn spawn_feed_listener(
    ws_url: &str,
) -> Result<mpsc::UnboundedReceiver<FeedEvent>, FeedError> {
    let (stream, _) = connect_async(ws_url).await?;
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let (_, mut read) = stream.split();
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => match serde_json::from_str::<FeedEvent>(&text) {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!(%error, "unrecognized feed message");
                    }
                },
                Ok(Message::Close(_)) | Err(_) => break,
                Ok(_) => {}
            }
        }
        debug!("room feed closed");
    });

    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_events_decode() {
        // given:
        let joined = r#"{"type":"partner-joined","participant_id":"p2"}"#;
        let swiped =
            r#"{"type":"swipe-recorded","participant_id":"p1","item_id":"7","direction":"right"}"#;
        let matched = r#"{"type":"match-found","item_id":"7"}"#;

        // when:
        let joined: FeedEvent = serde_json::from_str(joined).unwrap();
        let swiped: FeedEvent = serde_json::from_str(swiped).unwrap();
        let matched: FeedEvent = serde_json::from_str(matched).unwrap();

        // then:
        assert!(matches!(joined, FeedEvent::PartnerJoined { .. }));
        assert!(
            matches!(swiped, FeedEvent::SwipeRecorded { ref direction, .. } if direction == "right")
        );
        assert!(matches!(matched, FeedEvent::MatchFound { ref item_id } if item_id == "7"));
    }
}
