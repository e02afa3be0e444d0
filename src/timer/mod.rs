//! Countdown timer collaborator.

pub mod countdown;

pub use countdown::Countdown;
