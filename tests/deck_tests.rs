//! Deck invariant tests.
//!
//! Property-based checks that every deal, for any pair count and seed,
//! satisfies the deck invariants: two cards per pair, unique instance
//! IDs, all cards unmatched.

use proptest::prelude::*;

use match_pairs::{CardSet, Deck, GameRng, PairId};

fn face_names(pairs: usize) -> Vec<String> {
    (0..pairs).map(|i| format!("face-{i}")).collect()
}

proptest! {
    #[test]
    fn deal_is_well_formed(pairs in 1usize..=12, seed in any::<u64>()) {
        let set = CardSet::new(face_names(pairs));
        let mut rng = GameRng::new(seed);

        let deck = Deck::deal(&set, &mut rng);

        prop_assert_eq!(deck.len(), pairs * 2);
        prop_assert!(deck.is_well_formed());
        prop_assert_eq!(deck.matched_count(), 0);
    }

    #[test]
    fn deal_contains_every_pair_twice(pairs in 1usize..=12, seed in any::<u64>()) {
        let set = CardSet::new(face_names(pairs));
        let mut rng = GameRng::new(seed);

        let deck = Deck::deal(&set, &mut rng);

        for pair in set.pairs() {
            let count = deck.iter().filter(|c| c.pair == pair).count();
            prop_assert_eq!(count, 2);
        }
    }

    #[test]
    fn deal_is_reproducible(seed in any::<u64>()) {
        let set = CardSet::classic();

        let deck1 = Deck::deal(&set, &mut GameRng::new(seed));
        let deck2 = Deck::deal(&set, &mut GameRng::new(seed));

        prop_assert_eq!(deck1, deck2);
    }
}

/// A sanity check that the shuffle actually permutes: across many seeds,
/// the first card's pair should not always be the same.
#[test]
fn test_shuffle_moves_cards() {
    let set = CardSet::classic();
    let mut seen_first_pairs = std::collections::BTreeSet::new();

    for seed in 0..64 {
        let deck = Deck::deal(&set, &mut GameRng::new(seed));
        let first: PairId = deck.iter().next().unwrap().pair;
        seen_first_pairs.insert(first.raw());
    }

    assert!(seen_first_pairs.len() > 1, "every deal started with the same pair");
}
