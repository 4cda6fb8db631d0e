//! Domain layer for the match engine.
//!
//! Business logic that is independent of data transfer objects (DTOs) and
//! infrastructure concerns: validated value objects, the room and swipe
//! models, pure match derivation over the ledger, and the repository trait
//! the infrastructure layer implements.

pub mod entity;
pub mod error;
pub mod factory;
pub mod matching;
pub mod repository;
pub mod value_object;

pub use entity::{Room, Swipe};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::{ParticipantIdFactory, RoomCodeFactory};
pub use matching::{all_matches, is_match};
pub use repository::{RoomRepository, SlotClaim};
pub use value_object::{Direction, ItemId, ParticipantId, RoomCode, RoomId, Timestamp};
