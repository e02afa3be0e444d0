//! Session configuration.
//!
//! The parent screen collects a player name and a mode selection before
//! the session starts; everything else (card set, limits, reveal delays)
//! has gameplay defaults. Configuration is validated at build time so the
//! controller never has to defend against an unplayable setup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::CardSet;

/// Default turn limit for [`GameMode::TurnLimited`].
pub const DEFAULT_TURN_LIMIT: u32 = 20;

/// Default countdown length in seconds for [`GameMode::Timed`].
pub const DEFAULT_INITIAL_TIME_SECS: u32 = 60;

/// Delay before a mismatched pair flips back, in milliseconds.
///
/// Long enough for the player to see both faces. A UX timing contract,
/// not a concurrency primitive.
pub const DEFAULT_MISMATCH_REVEAL_MS: u64 = 1000;

/// Delay before a terminal outcome is surfaced, in milliseconds.
///
/// Lets the final flip animation complete before the modal takes over.
pub const DEFAULT_OUTCOME_REVEAL_MS: u64 = 500;

/// Default player display name.
pub const DEFAULT_PLAYER_NAME: &str = "New Player";

/// Win/lose rule set, selected on the welcome screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Lose when the countdown expires.
    Timed,
    /// Lose when the turn limit is reached.
    TurnLimited,
    /// No loss condition; play until every pair is found.
    FreePlay,
}

impl GameMode {
    /// Map the welcome screen's integer selector (1/2/3) to a mode.
    ///
    /// Returns `None` for any other value; the caller renders no
    /// mode-specific UI in that case.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Timed),
            2 => Some(Self::TurnLimited),
            3 => Some(Self::FreePlay),
            _ => None,
        }
    }

    /// The selector value for this mode.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Timed => 1,
            Self::TurnLimited => 2,
            Self::FreePlay => 3,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Timed => "timed",
            Self::TurnLimited => "turn-limited",
            Self::FreePlay => "free play",
        };
        write!(f, "{name}")
    }
}

/// Configuration errors surfaced at build time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The card set has no faces; a deck cannot be dealt.
    #[error("card set has no faces")]
    EmptyCardSet,

    /// More faces than `PairId` can address.
    #[error("card set has {0} faces, at most 255 supported")]
    TooManyFaces(usize),

    /// A turn-limited game that is lost before the first pick.
    #[error("turn limit must be at least 1")]
    ZeroTurnLimit,
}

/// Validated session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Player display name, shown by the frontend greeting.
    pub player_name: String,

    /// Selected rule set.
    pub mode: GameMode,

    /// Faces the deck is dealt from.
    pub card_set: CardSet,

    /// Turns before a turn-limited game is lost.
    pub turn_limit: u32,

    /// Countdown length in seconds.
    pub initial_time_secs: u32,

    /// Delay before a mismatched pair flips back.
    pub mismatch_reveal_ms: u64,

    /// Delay before a terminal outcome is surfaced.
    pub outcome_reveal_ms: u64,
}

impl SessionConfig {
    /// Start building a configuration with gameplay defaults.
    #[must_use]
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}

/// Builder for [`SessionConfig`].
#[derive(Clone, Debug)]
pub struct SessionConfigBuilder {
    player_name: String,
    mode: GameMode,
    card_set: CardSet,
    turn_limit: u32,
    initial_time_secs: u32,
    mismatch_reveal_ms: u64,
    outcome_reveal_ms: u64,
}

impl Default for SessionConfigBuilder {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            mode: GameMode::FreePlay,
            card_set: CardSet::classic(),
            turn_limit: DEFAULT_TURN_LIMIT,
            initial_time_secs: DEFAULT_INITIAL_TIME_SECS,
            mismatch_reveal_ms: DEFAULT_MISMATCH_REVEAL_MS,
            outcome_reveal_ms: DEFAULT_OUTCOME_REVEAL_MS,
        }
    }
}

impl SessionConfigBuilder {
    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn card_set(mut self, set: CardSet) -> Self {
        self.card_set = set;
        self
    }

    pub fn turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }

    pub fn initial_time_secs(mut self, secs: u32) -> Self {
        self.initial_time_secs = secs;
        self
    }

    pub fn mismatch_reveal_ms(mut self, ms: u64) -> Self {
        self.mismatch_reveal_ms = ms;
        self
    }

    pub fn outcome_reveal_ms(mut self, ms: u64) -> Self {
        self.outcome_reveal_ms = ms;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        if self.card_set.is_empty() {
            return Err(ConfigError::EmptyCardSet);
        }
        if self.card_set.len() > 255 {
            return Err(ConfigError::TooManyFaces(self.card_set.len()));
        }
        if self.turn_limit == 0 {
            return Err(ConfigError::ZeroTurnLimit);
        }

        Ok(SessionConfig {
            player_name: self.player_name,
            mode: self.mode,
            card_set: self.card_set,
            turn_limit: self.turn_limit,
            initial_time_secs: self.initial_time_secs,
            mismatch_reveal_ms: self.mismatch_reveal_ms,
            outcome_reveal_ms: self.outcome_reveal_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_index() {
        assert_eq!(GameMode::from_index(1), Some(GameMode::Timed));
        assert_eq!(GameMode::from_index(2), Some(GameMode::TurnLimited));
        assert_eq!(GameMode::from_index(3), Some(GameMode::FreePlay));
        assert_eq!(GameMode::from_index(0), None);
        assert_eq!(GameMode::from_index(4), None);
    }

    #[test]
    fn test_mode_index_round_trip() {
        for mode in [GameMode::Timed, GameMode::TurnLimited, GameMode::FreePlay] {
            assert_eq!(GameMode::from_index(mode.index()), Some(mode));
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = SessionConfig::builder().build().unwrap();

        assert_eq!(config.player_name, "New Player");
        assert_eq!(config.mode, GameMode::FreePlay);
        assert_eq!(config.card_set.len(), 6);
        assert_eq!(config.turn_limit, 20);
        assert_eq!(config.initial_time_secs, 60);
        assert_eq!(config.mismatch_reveal_ms, 1000);
        assert_eq!(config.outcome_reveal_ms, 500);
    }

    #[test]
    fn test_builder_custom() {
        let config = SessionConfig::builder()
            .player_name("Ada")
            .mode(GameMode::Timed)
            .turn_limit(10)
            .initial_time_secs(30)
            .build()
            .unwrap();

        assert_eq!(config.player_name, "Ada");
        assert_eq!(config.mode, GameMode::Timed);
        assert_eq!(config.turn_limit, 10);
        assert_eq!(config.initial_time_secs, 30);
    }

    #[test]
    fn test_empty_card_set_rejected() {
        let result = SessionConfig::builder()
            .card_set(CardSet::new(Vec::<String>::new()))
            .build();

        assert_eq!(result.unwrap_err(), ConfigError::EmptyCardSet);
    }

    #[test]
    fn test_zero_turn_limit_rejected() {
        let result = SessionConfig::builder().turn_limit(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::ZeroTurnLimit);
    }

    #[test]
    fn test_too_many_faces_rejected() {
        let faces: Vec<String> = (0..300).map(|i| format!("face-{i}")).collect();
        let result = SessionConfig::builder().card_set(CardSet::new(faces)).build();
        assert_eq!(result.unwrap_err(), ConfigError::TooManyFaces(300));
    }
}
