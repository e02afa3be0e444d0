//! Session outcome state machine.
//!
//! `Ongoing -> Won | Lost` with no other transitions; only a fresh deal
//! returns the session to `Ongoing`. Terminal states are mutually
//! exclusive.

use serde::{Deserialize, Serialize};

/// Why a session was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// Turn limit reached (turn-limited mode).
    OutOfTurns,
    /// Countdown expired (timed mode).
    OutOfTime,
}

/// Result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Still playing.
    Ongoing,
    /// Every pair found.
    Won,
    /// A mode's loss condition fired first.
    Lost(LossReason),
}

impl Outcome {
    /// Has the session ended?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Won => write!(f, "won"),
            Outcome::Lost(LossReason::OutOfTurns) => write!(f, "lost (out of turns)"),
            Outcome::Lost(LossReason::OutOfTime) => write!(f, "lost (out of time)"),
        }
    }
}
