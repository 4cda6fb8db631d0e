//! Concrete implementations of the domain's `RoomRepository` trait.
//!
//! The usecase layer depends on the trait, never on these implementations
//! (dependency inversion).

pub mod inmemory;

pub use inmemory::InMemoryRoomRepository;
