//! Card-distribution logic for game start.
//!
//! The shuffle is a one-time, non-repeatable operation: it draws from the
//! OS-seeded thread RNG and takes no seed parameter, so two deals are
//! never guaranteed to agree. Distribution itself is deterministic given
//! a shuffle order: card `i` goes to player `i mod player_count`.

use rand::rng;
use rand::seq::SliceRandom;

use crate::errors::domain::{DomainError, InvalidStateKind};

/// Produce a uniformly-random permutation of the deck.
pub fn shuffle_deck<T>(mut deck: Vec<T>) -> Vec<T> {
    deck.shuffle(&mut rng());
    deck
}

/// Partition cards round-robin across `player_count` hands.
///
/// Card `i` lands in hand `i % player_count`, so hands differ in size by
/// at most one and any remainder goes to the earlier-indexed hands.
/// Fails before touching anything when the roster is empty - the modulo
/// is undefined for zero players.
pub fn assign_round_robin<T>(
    cards: Vec<T>,
    player_count: usize,
) -> Result<Vec<Vec<T>>, DomainError> {
    if player_count == 0 {
        return Err(DomainError::invalid_state(
            InvalidStateKind::EmptyRoster,
            "cannot deal cards to an empty roster",
        ));
    }

    let mut hands: Vec<Vec<T>> = (0..player_count).map(|_| Vec::new()).collect();
    for (i, card) in cards.into_iter().enumerate() {
        hands[i % player_count].push(card);
    }
    Ok(hands)
}

/// Shuffle the deck and deal it out round-robin.
pub fn deal<T>(deck: Vec<T>, player_count: usize) -> Result<Vec<Vec<T>>, DomainError> {
    assign_round_robin(shuffle_deck(deck), player_count)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn round_robin_remainder_goes_to_earlier_hands() {
        let hands = assign_round_robin((0..10).collect::<Vec<_>>(), 3).unwrap();
        let sizes: Vec<usize> = hands.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 3, 3]);
    }

    #[test]
    fn round_robin_is_deterministic_given_order() {
        let hands = assign_round_robin(vec!["a", "b", "c", "d", "e"], 2).unwrap();
        assert_eq!(hands[0], vec!["a", "c", "e"]);
        assert_eq!(hands[1], vec!["b", "d"]);
    }

    #[test]
    fn zero_players_fails_with_invalid_state() {
        let result = assign_round_robin(vec![1, 2, 3], 0);
        assert!(matches!(
            result,
            Err(DomainError::InvalidState(InvalidStateKind::EmptyRoster, _))
        ));
    }

    #[test]
    fn empty_deck_deals_empty_hands() {
        let hands = deal(Vec::<u32>::new(), 4).unwrap();
        assert_eq!(hands.len(), 4);
        assert!(hands.iter().all(Vec::is_empty));
    }

    #[test]
    fn shuffle_preserves_the_deck() {
        let mut shuffled = shuffle_deck((0..100).collect::<Vec<_>>());
        shuffled.sort_unstable();
        assert_eq!(shuffled, (0..100).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn hands_are_even_and_complete(deck_size in 0usize..200, player_count in 1usize..12) {
            let deck: Vec<usize> = (0..deck_size).collect();
            let hands = deal(deck, player_count).unwrap();
            prop_assert_eq!(hands.len(), player_count);

            let sizes: Vec<usize> = hands.iter().map(Vec::len).collect();
            prop_assert_eq!(sizes.iter().sum::<usize>(), deck_size);

            let max = sizes.iter().max().copied().unwrap_or(0);
            let min = sizes.iter().min().copied().unwrap_or(0);
            prop_assert!(max - min <= 1);

            // Every card dealt exactly once
            let mut all: Vec<usize> = hands.concat();
            all.sort_unstable();
            prop_assert_eq!(all, (0..deck_size).collect::<Vec<_>>());
        }
    }
}
