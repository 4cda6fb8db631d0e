//! HTTP API endpoint handlers.
//!
//! Error mapping: NotFound -> 404, NotAParticipant -> 403, invalid codes or
//! payload fields -> 400/422, ExhaustedRetries and storage failures -> 503.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{Direction, ItemId, ParticipantId, RoomCode},
    infrastructure::dto::http::{
        CreateRoomRequest, JoinResponseDto, MatchListDto, RoomCreatedDto, RoomDto, SwipeAckDto,
        SwipeRequest,
    },
    ui::state::AppState,
    usecase::{
        CreateRoomError, CreateRoomUseCase, JoinOutcome, JoinRoomError, JoinRoomUseCase,
        ListMatchesError, ListMatchesUseCase, RecordSwipeError, RecordSwipeUseCase,
        ResolveRoomError, ResolveRoomUseCase,
    },
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Create a room filtered to the given content sources
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomCreatedDto>), StatusCode> {
    let usecase = CreateRoomUseCase::new(state.repository.clone());

    match usecase.execute(body.allowed_sources).await {
        Ok(created) => Ok((
            StatusCode::CREATED,
            Json(RoomCreatedDto {
                code: created.code.into_string(),
                participant_id: created.participant_id.to_string(),
            }),
        )),
        Err(CreateRoomError::NoSourcesSelected) => Err(StatusCode::UNPROCESSABLE_ENTITY),
        Err(CreateRoomError::ExhaustedRetries { attempts }) => {
            tracing::error!("Room code space exhausted after {} attempts", attempts);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
        Err(CreateRoomError::Storage(e)) => {
            tracing::error!("Room creation failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Resolve a room code to its current view
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<RoomDto>, StatusCode> {
    let code = parse_code(&code)?;
    let usecase = ResolveRoomUseCase::new(state.repository.clone());

    match usecase.execute(&code).await {
        Ok(room) => Ok(Json(RoomDto::from_room(&room))),
        Err(ResolveRoomError::NotFound) => Err(StatusCode::NOT_FOUND),
        Err(ResolveRoomError::Storage(e)) => {
            tracing::error!("Room lookup failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Join a room; the first joiner wins slot B, later joiners spectate
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<JoinResponseDto>, StatusCode> {
    let code = parse_code(&code)?;
    let usecase = JoinRoomUseCase::new(state.repository.clone());

    match usecase.execute(&code).await {
        Ok(JoinOutcome::Joined {
            participant_id,
            room,
        }) => Ok(Json(JoinResponseDto::Joined {
            participant_id: participant_id.to_string(),
            room: RoomDto::from_room(&room),
        })),
        Ok(JoinOutcome::Spectator { room }) => Ok(Json(JoinResponseDto::Spectator {
            room: RoomDto::from_room(&room),
        })),
        Err(JoinRoomError::NotFound) => Err(StatusCode::NOT_FOUND),
        Err(JoinRoomError::Storage(e)) => {
            tracing::error!("Room join failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Record one directional decision in the room's ledger
pub async fn record_swipe(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Json(body): Json<SwipeRequest>,
) -> Result<(StatusCode, Json<SwipeAckDto>), StatusCode> {
    let code = parse_code(&code)?;
    let participant =
        ParticipantId::parse(&body.participant_id).map_err(|_| StatusCode::BAD_REQUEST)?;
    let item_id = ItemId::new(body.item_id).map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
    let direction = match body.direction.as_str() {
        "left" => Direction::Left,
        "right" => Direction::Right,
        other => {
            tracing::warn!("Invalid swipe direction: '{}'", other);
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    let usecase = RecordSwipeUseCase::new(state.repository.clone(), state.events.clone());

    match usecase.execute(&code, participant, item_id, direction).await {
        Ok(ack) => Ok((
            StatusCode::CREATED,
            Json(SwipeAckDto {
                matched: ack.matched,
            }),
        )),
        Err(RecordSwipeError::RoomNotFound) => Err(StatusCode::NOT_FOUND),
        Err(RecordSwipeError::NotAParticipant(id)) => {
            tracing::warn!("Rejected swipe from non-occupant '{}'", id);
            Err(StatusCode::FORBIDDEN)
        }
        Err(RecordSwipeError::WriteFailure(e)) => {
            tracing::error!("Swipe write failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// List the room's matched items, derived fresh from the ledger
pub async fn get_matches(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<MatchListDto>, StatusCode> {
    let code = parse_code(&code)?;
    let usecase = ListMatchesUseCase::new(state.repository.clone());

    match usecase.execute(&code).await {
        Ok(items) => Ok(Json(MatchListDto {
            items: items.into_iter().map(ItemId::into_string).collect(),
        })),
        Err(ListMatchesError::NotFound) => Err(StatusCode::NOT_FOUND),
        Err(ListMatchesError::Storage(e)) => {
            tracing::error!("Match listing failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

fn parse_code(raw: &str) -> Result<RoomCode, StatusCode> {
    RoomCode::new(raw.to_string()).map_err(|_| {
        tracing::warn!("Invalid room code format: '{}'", raw);
        StatusCode::BAD_REQUEST
    })
}
