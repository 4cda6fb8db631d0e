//! Pure match derivation over the swipe ledger.
//!
//! Matches are computed on read from the immutable ledger rather than kept
//! as separately-mutated state: a match can never exist without both
//! qualifying swipes existing, because the predicate is evaluated against
//! the ledger itself. Cost is O(swipes-for-that-item) per check, which is
//! fine for a two-party session.

use std::collections::{HashMap, HashSet};

use super::entity::{Room, Swipe};
use super::value_object::{Direction, ItemId, ParticipantId};

/// Whether `item_id` is a match for the room given the ledger contents.
///
/// True iff the room is Active and both occupied slots have at least one
/// right-swipe on the item. Always false while the room is Waiting. Left
/// swipes and duplicate right-swipes are inert.
pub fn is_match(room: &Room, item_id: &ItemId, swipes: &[Swipe]) -> bool {
    let (Some(slot_a), Some(slot_b)) = (room.slot_a, room.slot_b) else {
        return false;
    };

    let likers: HashSet<ParticipantId> = swipes
        .iter()
        .filter(|s| s.direction == Direction::Right && &s.item_id == item_id)
        .map(|s| s.participant)
        .collect();

    likers.contains(&slot_a) && likers.contains(&slot_b)
}

/// All matched items for the room, sorted by item id.
///
/// Groups right-swipes by item and keeps the items whose swiper set covers
/// both occupied slots. Empty while the room is Waiting.
pub fn all_matches(room: &Room, swipes: &[Swipe]) -> Vec<ItemId> {
    let (Some(slot_a), Some(slot_b)) = (room.slot_a, room.slot_b) else {
        return Vec::new();
    };

    let mut likers_by_item: HashMap<&ItemId, HashSet<ParticipantId>> = HashMap::new();
    for swipe in swipes.iter().filter(|s| s.direction == Direction::Right) {
        likers_by_item
            .entry(&swipe.item_id)
            .or_default()
            .insert(swipe.participant);
    }

    let mut matches: Vec<ItemId> = likers_by_item
        .into_iter()
        .filter(|(_, likers)| likers.contains(&slot_a) && likers.contains(&slot_b))
        .map(|(item_id, _)| item_id.clone())
        .collect();
    matches.sort();
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::ParticipantIdFactory;
    use crate::domain::value_object::{RoomCode, RoomId, Timestamp};

    fn active_room() -> Room {
        let mut room = Room::new(
            RoomId::generate(),
            RoomCode::new("MAKO42".to_string()).unwrap(),
            vec!["Netflix".to_string()],
            ParticipantIdFactory::generate(),
            Timestamp::new(0),
        );
        room.claim_slot_b(ParticipantIdFactory::generate());
        room
    }

    fn swipe(room: &Room, participant: ParticipantId, item: &str, direction: Direction) -> Swipe {
        Swipe::new(
            room.id,
            participant,
            ItemId::new(item.to_string()).unwrap(),
            direction,
            Timestamp::new(0),
        )
    }

    #[test]
    fn test_is_match_false_while_waiting() {
        // given: a waiting room where the sole occupant swiped right
        let room = Room::new(
            RoomId::generate(),
            RoomCode::new("MAKO42".to_string()).unwrap(),
            vec!["Netflix".to_string()],
            ParticipantIdFactory::generate(),
            Timestamp::new(0),
        );
        let creator = room.slot_a.unwrap();
        let swipes = vec![swipe(&room, creator, "7", Direction::Right)];

        // then: fewer than two occupied slots, never a match
        assert!(!is_match(
            &room,
            &ItemId::new("7".to_string()).unwrap(),
            &swipes
        ));
        assert!(all_matches(&room, &swipes).is_empty());
    }

    #[test]
    fn test_is_match_requires_both_occupants() {
        // given:
        let room = active_room();
        let a = room.slot_a.unwrap();
        let b = room.slot_b.unwrap();
        let item = ItemId::new("7".to_string()).unwrap();

        // when: only one side has swiped right
        let one_sided = vec![swipe(&room, a, "7", Direction::Right)];

        // then:
        assert!(!is_match(&room, &item, &one_sided));

        // when: the partner swipes right too
        let mutual = vec![
            swipe(&room, a, "7", Direction::Right),
            swipe(&room, b, "7", Direction::Right),
        ];

        // then:
        assert!(is_match(&room, &item, &mutual));
    }

    #[test]
    fn test_left_swipe_never_contributes() {
        // given: A left, B right on the same item
        let room = active_room();
        let a = room.slot_a.unwrap();
        let b = room.slot_b.unwrap();
        let swipes = vec![
            swipe(&room, a, "9", Direction::Left),
            swipe(&room, b, "9", Direction::Right),
        ];

        // then:
        assert!(!is_match(
            &room,
            &ItemId::new("9".to_string()).unwrap(),
            &swipes
        ));
    }

    #[test]
    fn test_duplicate_swipes_are_idempotent() {
        // given: the same right swipe recorded twice by one participant
        let room = active_room();
        let a = room.slot_a.unwrap();
        let b = room.slot_b.unwrap();
        let once = vec![
            swipe(&room, a, "7", Direction::Right),
            swipe(&room, b, "7", Direction::Right),
        ];
        let mut twice = once.clone();
        twice.push(swipe(&room, a, "7", Direction::Right));

        // then: allMatches output is unchanged versus recording it once
        assert_eq!(all_matches(&room, &once), all_matches(&room, &twice));
    }

    #[test]
    fn test_all_matches_monotonically_non_decreasing() {
        // given: a ledger that grows swipe by swipe
        let room = active_room();
        let a = room.slot_a.unwrap();
        let b = room.slot_b.unwrap();
        let ledger = vec![
            swipe(&room, a, "7", Direction::Right),
            swipe(&room, b, "7", Direction::Right),
            swipe(&room, a, "9", Direction::Left),
            swipe(&room, b, "9", Direction::Right),
            swipe(&room, a, "3", Direction::Right),
            swipe(&room, b, "3", Direction::Right),
        ];

        // then: once an item matches, it stays matched as swipes accumulate
        let mut previous: Vec<ItemId> = Vec::new();
        for n in 0..=ledger.len() {
            let current = all_matches(&room, &ledger[..n]);
            assert!(previous.iter().all(|item| current.contains(item)));
            previous = current;
        }
        assert_eq!(
            previous,
            vec![
                ItemId::new("3".to_string()).unwrap(),
                ItemId::new("7".to_string()).unwrap(),
            ]
        );
    }

    #[test]
    fn test_all_matches_sorted_by_item_id() {
        // given: matches completed in reverse id order
        let room = active_room();
        let a = room.slot_a.unwrap();
        let b = room.slot_b.unwrap();
        let swipes = vec![
            swipe(&room, a, "9", Direction::Right),
            swipe(&room, b, "9", Direction::Right),
            swipe(&room, a, "2", Direction::Right),
            swipe(&room, b, "2", Direction::Right),
        ];

        // then:
        assert_eq!(
            all_matches(&room, &swipes),
            vec![
                ItemId::new("2".to_string()).unwrap(),
                ItemId::new("9".to_string()).unwrap(),
            ]
        );
    }
}
