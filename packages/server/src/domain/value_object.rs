//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::ValueObjectError;

/// Consonant alphabet for room codes. Vowels are excluded so the pattern
/// holds, and the set matches what survives verbal sharing.
pub const CODE_CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXYZ";

/// Vowel alphabet for room codes.
pub const CODE_VOWELS: &str = "AEIOU";

/// Digit alphabet for room codes. 0 and 1 are excluded as ambiguous-looking.
pub const CODE_DIGITS: &str = "23456789";

/// Length of a room code.
pub const CODE_LENGTH: usize = 6;

/// Room code value object.
///
/// A stable, human-shareable 6-character identifier following the
/// consonant-vowel-consonant-vowel-digit-digit pattern (e.g. `MAKO42`).
/// Lowercase input is normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCode(String);

impl RoomCode {
    /// Create a new RoomCode, validating length and alphabet pattern.
    pub fn new(code: String) -> Result<Self, ValueObjectError> {
        let code = code.to_ascii_uppercase();
        let len = code.chars().count();
        if len != CODE_LENGTH {
            return Err(ValueObjectError::RoomCodeWrongLength {
                expected: CODE_LENGTH,
                actual: len,
            });
        }
        let chars: Vec<char> = code.chars().collect();
        let valid = CODE_CONSONANTS.contains(chars[0])
            && CODE_VOWELS.contains(chars[1])
            && CODE_CONSONANTS.contains(chars[2])
            && CODE_VOWELS.contains(chars[3])
            && CODE_DIGITS.contains(chars[4])
            && CODE_DIGITS.contains(chars[5]);
        if !valid {
            return Err(ValueObjectError::RoomCodeInvalidPattern(code));
        }
        Ok(Self(code))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Internal room identifier value object (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(Uuid);

impl RoomId {
    /// Create a RoomId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random RoomId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID value.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Participant identifier value object.
///
/// A random opaque token minted per room; it carries no structural meaning
/// and is never authenticated beyond slot membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    /// Create a ParticipantId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a ParticipantId from its string form.
    pub fn parse(value: &str) -> Result<Self, ValueObjectError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ValueObjectError::ParticipantIdInvalid(value.to_string()))
    }

    /// Get the inner UUID value.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog item identifier value object.
///
/// Matching is keyed by this identifier, not by deck position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ItemId.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::ItemIdEmpty);
        }
        let len = id.len();
        if len > 64 {
            return Err(ValueObjectError::ItemIdTooLong { max: 64, actual: len });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_code_new_success() {
        // given:
        let code = "MAKO42".to_string();

        // when:
        let result = RoomCode::new(code);

        // then:
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "MAKO42");
    }

    #[test]
    fn test_room_code_normalizes_lowercase() {
        // given:
        let code = "ruba87".to_string();

        // when:
        let result = RoomCode::new(code);

        // then:
        assert_eq!(result.unwrap().as_str(), "RUBA87");
    }

    #[test]
    fn test_room_code_rejects_consonant_in_vowel_slot() {
        // given: Y is a consonant, so it cannot appear in position 4
        let code = "RUBY87".to_string();

        // when:
        let result = RoomCode::new(code);

        // then:
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::RoomCodeInvalidPattern("RUBY87".to_string())
        );
    }

    #[test]
    fn test_room_code_wrong_length_fails() {
        // given:
        let code = "MAKO4".to_string();

        // when:
        let result = RoomCode::new(code);

        // then:
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::RoomCodeWrongLength {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_room_code_vowel_in_consonant_slot_fails() {
        // given: first character must be a consonant
        let code = "AAKO42".to_string();

        // when:
        let result = RoomCode::new(code);

        // then:
        assert!(matches!(
            result.unwrap_err(),
            ValueObjectError::RoomCodeInvalidPattern(_)
        ));
    }

    #[test]
    fn test_room_code_ambiguous_digit_fails() {
        // given: 0 and 1 are excluded from the digit alphabet
        let code = "MAKO01".to_string();

        // when:
        let result = RoomCode::new(code);

        // then:
        assert!(matches!(
            result.unwrap_err(),
            ValueObjectError::RoomCodeInvalidPattern(_)
        ));
    }

    #[test]
    fn test_participant_id_parse_roundtrip() {
        // given:
        let id = ParticipantId::from_uuid(Uuid::new_v4());

        // when:
        let parsed = ParticipantId::parse(&id.to_string());

        // then:
        assert_eq!(parsed.unwrap(), id);
    }

    #[test]
    fn test_participant_id_parse_invalid_fails() {
        // when:
        let result = ParticipantId::parse("not-a-uuid");

        // then:
        assert!(matches!(
            result.unwrap_err(),
            ValueObjectError::ParticipantIdInvalid(_)
        ));
    }

    #[test]
    fn test_item_id_new_success() {
        // when:
        let result = ItemId::new("550".to_string());

        // then:
        assert_eq!(result.unwrap().as_str(), "550");
    }

    #[test]
    fn test_item_id_empty_fails() {
        // when:
        let result = ItemId::new(String::new());

        // then:
        assert_eq!(result.unwrap_err(), ValueObjectError::ItemIdEmpty);
    }

    #[test]
    fn test_item_id_too_long_fails() {
        // given:
        let id = "a".repeat(65);

        // when:
        let result = ItemId::new(id);

        // then:
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::ItemIdTooLong { max: 64, actual: 65 }
        );
    }

    #[test]
    fn test_timestamp_ordering() {
        // given:
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then:
        assert!(ts1 < ts2);
        assert!(ts2 > ts1);
    }
}
