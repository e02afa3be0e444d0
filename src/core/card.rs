//! Cards and card faces.
//!
//! A memory deck is built from a `CardSet` of faces. Each face yields a
//! pair of `Card` instances that share a `PairId` but carry distinct
//! `CardId`s, so a specific physical card can be referenced even though
//! its twin looks identical.

use serde::{Deserialize, Serialize};

/// Face identifier. Two cards in a deck share each `PairId`.
///
/// The engine doesn't interpret pair IDs - they're opaque identifiers
/// compared for equality during pick resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u8);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Card instance identifier, unique across a dealt deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card instance in a dealt deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID for this instance.
    pub id: CardId,

    /// The face this card shows. Shared with exactly one other card.
    pub pair: PairId,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl Card {
    /// Create an unmatched card.
    #[must_use]
    pub fn new(id: CardId, pair: PairId) -> Self {
        Self {
            id,
            pair,
            matched: false,
        }
    }
}

/// The set of faces a deck is dealt from.
///
/// Each face produces one pair. Face names are display hints for the
/// frontend (typically asset names); the engine only uses their count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    faces: Vec<String>,
}

impl CardSet {
    /// Create a card set from face names.
    pub fn new<I, S>(faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            faces: faces.into_iter().map(Into::into).collect(),
        }
    }

    /// The classic six-face set.
    #[must_use]
    pub fn classic() -> Self {
        Self::new([
            "book",
            "bunny",
            "hat",
            "magic-ball",
            "rainbow-castle",
            "smoke",
        ])
    }

    /// Number of faces (= number of pairs in a dealt deck).
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Is the set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Get the face name for a pair.
    #[must_use]
    pub fn face(&self, pair: PairId) -> Option<&str> {
        self.faces.get(pair.raw() as usize).map(String::as_str)
    }

    /// Iterate over the pair IDs this set produces.
    pub fn pairs(&self) -> impl Iterator<Item = PairId> {
        (0..self.faces.len() as u8).map(PairId::new)
    }
}

impl Default for CardSet {
    fn default() -> Self {
        Self::classic()
    }
}
