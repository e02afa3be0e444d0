//! Deck construction and matched-state tracking.
//!
//! A deck holds `2 x pair_count` cards in display order. Dealing
//! duplicates every face in the card set, assigns each instance a fresh
//! unique `CardId`, and places the cards with a uniform shuffle.
//!
//! ## Invariants
//!
//! - Exactly two cards share each `PairId`.
//! - `CardId` is unique across the deck.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId, CardSet, PairId};
use super::rng::GameRng;

/// An ordered, shuffled deck of paired cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: SmallVec<[Card; 12]>,
}

impl Deck {
    /// Deal a fresh shuffled deck from a card set.
    ///
    /// Every card starts unmatched. Instance IDs are unique across the
    /// deck and fresh for this deal.
    #[must_use]
    pub fn deal(set: &CardSet, rng: &mut GameRng) -> Self {
        let mut cards: SmallVec<[Card; 12]> = SmallVec::with_capacity(set.len() * 2);
        let mut next_id = 0u32;

        for pair in set.pairs() {
            for _ in 0..2 {
                cards.push(Card::new(CardId::new(next_id), pair));
                next_id += 1;
            }
        }

        rng.shuffle(&mut cards);

        Self { cards }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Look up a card by instance ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Mark both cards of a pair as matched.
    ///
    /// Returns the number of cards marked (2 for a valid pair).
    pub fn mark_pair_matched(&mut self, pair: PairId) -> usize {
        let mut marked = 0;
        for card in self.cards.iter_mut().filter(|c| c.pair == pair) {
            card.matched = true;
            marked += 1;
        }
        marked
    }

    /// Are all cards matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Check the deck invariants: two cards per pair, unique IDs.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut pair_counts: FxHashMap<PairId, usize> = FxHashMap::default();
        let mut seen_ids: FxHashMap<CardId, ()> = FxHashMap::default();

        for card in &self.cards {
            *pair_counts.entry(card.pair).or_insert(0) += 1;
            if seen_ids.insert(card.id, ()).is_some() {
                return false;
            }
        }

        pair_counts.values().all(|&n| n == 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_classic_deck() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(&CardSet::classic(), &mut rng);

        assert_eq!(deck.len(), 12);
        assert!(deck.is_well_formed());
        assert_eq!(deck.matched_count(), 0);
        assert!(!deck.all_matched());
    }

    #[test]
    fn test_deal_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let deck1 = Deck::deal(&CardSet::classic(), &mut rng1);
        let deck2 = Deck::deal(&CardSet::classic(), &mut rng2);

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_deal_varies_with_seed() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let deck1 = Deck::deal(&CardSet::classic(), &mut rng1);
        let deck2 = Deck::deal(&CardSet::classic(), &mut rng2);

        let order1: Vec<_> = deck1.iter().map(|c| c.pair).collect();
        let order2: Vec<_> = deck2.iter().map(|c| c.pair).collect();
        assert_ne!(order1, order2);
    }

    #[test]
    fn test_mark_pair_matched() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::deal(&CardSet::classic(), &mut rng);

        let marked = deck.mark_pair_matched(PairId::new(0));
        assert_eq!(marked, 2);
        assert_eq!(deck.matched_count(), 2);

        // Marking again is idempotent
        let marked = deck.mark_pair_matched(PairId::new(0));
        assert_eq!(marked, 2);
        assert_eq!(deck.matched_count(), 2);
    }

    #[test]
    fn test_all_matched() {
        let mut rng = GameRng::new(42);
        let set = CardSet::classic();
        let mut deck = Deck::deal(&set, &mut rng);

        for pair in set.pairs() {
            deck.mark_pair_matched(pair);
        }

        assert!(deck.all_matched());
        assert_eq!(deck.matched_count(), 12);
    }

    #[test]
    fn test_get_by_id() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(&CardSet::classic(), &mut rng);

        let first = *deck.iter().next().unwrap();
        assert_eq!(deck.get(first.id), Some(&first));
        assert_eq!(deck.get(CardId::new(999)), None);
    }
}
