//! Domain factories for creating identifiers.
//!
//! Randomness is isolated here behind pure generator functions so that
//! collision-retry logic can be tested without a live persistence layer.

use rand::Rng;
use uuid::Uuid;

use super::value_object::{CODE_CONSONANTS, CODE_DIGITS, CODE_VOWELS, ParticipantId, RoomCode};

/// Factory for generating RoomCode instances.
///
/// Generates codes from the C-V-C-V-D-D alphabet pattern (e.g. `MAKO42`,
/// `RUBA87`), a space of roughly 1.4M codes. Uniqueness is NOT guaranteed
/// here; the persistence layer enforces it with a unique constraint, and
/// `CreateRoomUseCase` retries minting on collision.
pub struct RoomCodeFactory;

impl RoomCodeFactory {
    /// Generate a new RoomCode using the process-wide entropy source.
    pub fn generate() -> RoomCode {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a new RoomCode from the given RNG.
    ///
    /// Pure over the RNG, so a seeded generator yields a deterministic code.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> RoomCode {
        let pick = |rng: &mut R, alphabet: &str| {
            let chars: Vec<char> = alphabet.chars().collect();
            chars[rng.gen_range(0..chars.len())]
        };

        let code: String = [
            pick(rng, CODE_CONSONANTS),
            pick(rng, CODE_VOWELS),
            pick(rng, CODE_CONSONANTS),
            pick(rng, CODE_VOWELS),
            pick(rng, CODE_DIGITS),
            pick(rng, CODE_DIGITS),
        ]
        .iter()
        .collect();

        // The generator only emits characters from the pattern alphabets.
        RoomCode::new(code).unwrap()
    }
}

/// Factory for generating ParticipantId instances.
///
/// Random UUID v4 tokens. Collision probability is treated as negligible and
/// never checked.
pub struct ParticipantIdFactory;

impl ParticipantIdFactory {
    /// Generate a new random ParticipantId.
    pub fn generate() -> ParticipantId {
        ParticipantId::from_uuid(Uuid::new_v4())
    }
}
