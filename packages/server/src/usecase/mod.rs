//! UseCase layer.
//!
//! One struct per client-facing operation, each holding the repository
//! abstraction (and the event bus where the operation announces something).
//! Called by the UI layer; operates on the domain layer.

pub mod create_room;
pub mod error;
pub mod join_room;
pub mod list_matches;
pub mod record_swipe;
pub mod resolve_room;

pub use create_room::{CreateRoomUseCase, CreatedRoom};
pub use error::{CreateRoomError, JoinRoomError, ListMatchesError, RecordSwipeError, ResolveRoomError};
pub use join_room::{JoinOutcome, JoinRoomUseCase};
pub use list_matches::ListMatchesUseCase;
pub use record_swipe::{RecordSwipeUseCase, SwipeAck};
pub use resolve_room::ResolveRoomUseCase;
