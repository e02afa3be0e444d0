//! The game session: controller, picks, and outcome state machine.

pub mod controller;
pub mod outcome;

pub use controller::{Rejection, SelectOutcome, Session};
pub use outcome::{LossReason, Outcome};
