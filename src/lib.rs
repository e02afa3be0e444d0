//! # match-pairs
//!
//! A deterministic session engine for a memory card-matching game.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The crate owns game state and rules; rendering
//!    binds to projections from the `view` module and forwards events
//!    back to the controller.
//!
//! 2. **Logical Time**: The embedder drives a millisecond clock via
//!    `Session::advance`. The countdown tick and both gameplay delays
//!    (mismatch reveal, outcome reveal) run off that clock, so every
//!    timing contract is deterministic and testable.
//!
//! 3. **Owned Delays**: Delayed actions are cancellable tasks held by
//!    the session, cancelled on restart and dropped on exit. A reveal
//!    scheduled by one game can never mutate the next.
//!
//! ## Modules
//!
//! - `core`: Cards, card sets, decks, configuration, seeded RNG
//! - `sched`: Cancellable scheduled tasks
//! - `timer`: Countdown collaborator
//! - `session`: The session controller and outcome state machine
//! - `view`: Presentational-children contract

pub mod core;
pub mod sched;
pub mod session;
pub mod timer;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, CardSet, ConfigError, Deck, GameMode, GameRng, PairId, SessionConfig,
    SessionConfigBuilder,
};

pub use crate::sched::{Scheduler, Task, TaskKind};

pub use crate::session::{LossReason, Outcome, Rejection, SelectOutcome, Session};

pub use crate::timer::Countdown;

pub use crate::view::{CardView, HudView, ModalView, SessionView};
