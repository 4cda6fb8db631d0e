//! HTTP client for the match engine's REST surface.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from talking to the server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No room has the given code
    #[error("room not found")]
    RoomNotFound,

    /// The server rejected the request
    #[error("server rejected the request with status {0}")]
    Rejected(StatusCode),

    /// Transport or decoding failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Response of room creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRoom {
    pub code: String,
    pub participant_id: String,
}

/// Room view as returned by resolve and join.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomView {
    pub code: String,
    pub allowed_sources: Vec<String>,
    /// "waiting" or "active"
    pub state: String,
    pub created_at: String,
}

/// Outcome of a join attempt.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum JoinResponse {
    Joined {
        participant_id: String,
        room: RoomView,
    },
    Spectator {
        room: RoomView,
    },
}

/// Acknowledgement of a recorded swipe.
#[derive(Debug, Clone, Deserialize)]
pub struct SwipeAck {
    pub matched: bool,
}

#[derive(Debug, Serialize)]
struct CreateRoomBody<'a> {
    allowed_sources: &'a [String],
}

#[derive(Debug, Serialize)]
struct SwipeBody<'a> {
    participant_id: &'a str,
    item_id: &'a str,
    direction: &'a str,
}

#[derive(Debug, Deserialize)]
struct MatchList {
    items: Vec<String>,
}

/// Thin wrapper over the server's HTTP API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a room filtered to the given content sources.
    pub async fn create_room(&self, allowed_sources: &[String]) -> Result<CreatedRoom, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/rooms", self.base_url))
            .json(&CreateRoomBody { allowed_sources })
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Resolve a room code to its current view.
    pub async fn resolve_room(&self, code: &str) -> Result<RoomView, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/rooms/{}", self.base_url, code))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Join a room; the first joiner wins slot B, later joiners spectate.
    pub async fn join_room(&self, code: &str) -> Result<JoinResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/rooms/{}/join", self.base_url, code))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Record one directional decision.
    pub async fn record_swipe(
        &self,
        code: &str,
        participant_id: &str,
        item_id: &str,
        direction: &str,
    ) -> Result<SwipeAck, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/rooms/{}/swipes", self.base_url, code))
            .json(&SwipeBody {
                participant_id,
                item_id,
                direction,
            })
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Fetch the room's current matches, sorted by item id.
    pub async fn matches(&self, code: &str) -> Result<Vec<String>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/rooms/{}/matches", self.base_url, code))
            .send()
            .await?;
        let list: MatchList = Self::decode(response).await?;
        Ok(list.items)
    }

    /// WebSocket URL of the room's event feed.
    pub fn feed_url(&self, code: &str) -> String {
        let ws_base = if let Some(rest) = self.base_url.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.base_url.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            self.base_url.clone()
        };
        format!("{ws_base}/ws/rooms/{code}")
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(ApiError::RoomNotFound),
            status => Err(ApiError::Rejected(status)),
        }
    }
}
