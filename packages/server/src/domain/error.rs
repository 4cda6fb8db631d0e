//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Room code length error
    #[error("RoomCode must be {expected} characters long (got {actual})")]
    RoomCodeWrongLength { expected: usize, actual: usize },

    /// Room code pattern error (consonant-vowel-consonant-vowel-digit-digit)
    #[error("RoomCode does not match the CVCVDD alphabet pattern (got: {0})")]
    RoomCodeInvalidPattern(String),

    /// Participant identifier parse error
    #[error("ParticipantId must be a valid UUID (got: {0})")]
    ParticipantIdInvalid(String),

    /// ItemId validation error
    #[error("ItemId cannot be empty")]
    ItemIdEmpty,

    /// ItemId too long error
    #[error("ItemId cannot exceed {max} characters (got {actual})")]
    ItemIdTooLong { max: usize, actual: usize },
}

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Unique constraint violation on the room code
    #[error("room code {0} is already taken")]
    CodeTaken(super::RoomCode),

    /// No room exists for the given code
    #[error("room not found")]
    RoomNotFound,

    /// Underlying storage is unavailable
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
