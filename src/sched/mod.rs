//! Cancellable scheduled tasks.
//!
//! The two gameplay delays (mismatch reveal, outcome reveal) are modeled
//! as tasks owned by the session and keyed to its logical millisecond
//! clock. Restart cancels everything pending, so a task scheduled by an
//! earlier session can never fire against a newer one. Dropping the
//! session drops the scheduler and with it every pending task.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::session::Outcome;

/// What a scheduled task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Flip a mismatched pair back, release the flip-lock, count the turn.
    MismatchReveal,
    /// Surface a terminal outcome. Never carries `Outcome::Ongoing`.
    OutcomeReveal(Outcome),
}

/// A pending delayed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Logical clock time at which the task fires.
    pub fire_at: u64,

    /// The action to run.
    pub kind: TaskKind,
}

/// Session-owned task queue.
///
/// At most two tasks are ever pending (one mismatch reveal, one outcome
/// reveal), so storage stays inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduler {
    pending: SmallVec<[Task; 2]>,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task at an absolute clock time.
    pub fn schedule(&mut self, fire_at: u64, kind: TaskKind) {
        debug_assert!(
            !matches!(kind, TaskKind::OutcomeReveal(Outcome::Ongoing)),
            "Ongoing is not a revealable outcome"
        );
        self.pending.push(Task { fire_at, kind });
    }

    /// Cancel every pending task.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Drain the tasks due at or before `now`, in firing order.
    pub fn due(&mut self, now: u64) -> SmallVec<[Task; 2]> {
        let mut fired: SmallVec<[Task; 2]> = SmallVec::new();
        self.pending.retain(|task| {
            if task.fire_at <= now {
                fired.push(*task);
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|task| task.fire_at);
        fired
    }

    /// Is an outcome reveal already pending?
    ///
    /// The session schedules at most one: the first terminal verdict wins.
    #[must_use]
    pub fn outcome_pending(&self) -> bool {
        self.pending
            .iter()
            .any(|t| matches!(t.kind, TaskKind::OutcomeReveal(_)))
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Is the queue empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterate over pending tasks.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.pending.iter()
    }
}
