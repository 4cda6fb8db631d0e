//! UseCase layer error definitions.
//!
//! The taxonomy from the engine's error design: `NotFound` is
//! user-correctable; collision retries are internal and surface only as
//! `ExhaustedRetries`; `WriteFailure` is transient and never fatal to a
//! session.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Errors from room creation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoomError {
    /// The allowed-sources filter must name at least one source
    #[error("at least one content source must be selected")]
    NoSourcesSelected,

    /// Every minted code collided within the retry budget
    #[error("could not mint a unique room code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    /// Underlying storage failure
    #[error(transparent)]
    Storage(RepositoryError),
}

/// Errors from room resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveRoomError {
    /// No room has the given code
    #[error("room not found")]
    NotFound,

    /// Underlying storage failure
    #[error(transparent)]
    Storage(RepositoryError),
}

/// Errors from joining a room.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    /// No room has the given code
    #[error("room not found")]
    NotFound,

    /// Underlying storage failure
    #[error(transparent)]
    Storage(RepositoryError),
}

/// Errors from recording a swipe.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordSwipeError {
    /// No room has the given code
    #[error("room not found")]
    RoomNotFound,

    /// The writer occupies neither slot (spectators cannot swipe)
    #[error("participant {0} holds no slot in this room")]
    NotAParticipant(String),

    /// Transient storage failure; the caller may keep swiping
    #[error("swipe could not be persisted: {0}")]
    WriteFailure(RepositoryError),
}

/// Errors from listing matches.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListMatchesError {
    /// No room has the given code
    #[error("room not found")]
    NotFound,

    /// Underlying storage failure
    #[error(transparent)]
    Storage(RepositoryError),
}
