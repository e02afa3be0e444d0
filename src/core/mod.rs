//! Core types: cards, decks, RNG, configuration.
//!
//! These are the building blocks the session controller operates on.
//! Frontends configure a session via `SessionConfig` rather than
//! touching the controller internals.

pub mod card;
pub mod config;
pub mod deck;
pub mod rng;

pub use card::{Card, CardId, CardSet, PairId};
pub use config::{ConfigError, GameMode, SessionConfig, SessionConfigBuilder};
pub use deck::Deck;
pub use rng::GameRng;
