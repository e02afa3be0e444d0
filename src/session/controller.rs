//! The session controller.
//!
//! Owns all game state for one session: the dealt deck, the two picks,
//! the flip-lock, the turn counter, the countdown, and the scheduler
//! holding the delayed reveals. Frontends call `select_card` for player
//! input and `advance` from their frame tick; everything else is derived
//! state.
//!
//! ## Reactions
//!
//! Loss and win checks run only on the transition that can change their
//! answer (deck matched-set changed, turns changed, countdown expired),
//! never per render. At most one outcome reveal is pending at a time;
//! the first terminal verdict wins.

use tracing::{debug, info};

use crate::core::{CardId, Deck, GameMode, GameRng, SessionConfig};
use crate::sched::{Scheduler, TaskKind};
use crate::timer::Countdown;

use super::outcome::{LossReason, Outcome};

/// Why a card selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The session has already ended; the modal owns the surface.
    SessionOver,
    /// Two picks are being resolved.
    FlipLocked,
    /// No card with this ID in the deck.
    UnknownCard,
    /// The card's pair was already found.
    AlreadyMatched,
    /// The card is already the first pick.
    AlreadyPicked,
}

/// What a call to [`Session::select_card`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Recorded as the first pick.
    FirstPick,
    /// Second pick completed a pair; both cards are now matched.
    Matched,
    /// Second pick mismatched; the reveal flips back after the delay.
    Mismatch,
    /// Ignored, with the reason.
    Rejected(Rejection),
}

/// One game session, from deal to outcome.
///
/// Created at view mount and on every restart; discarded on exit.
/// Dropping the session cancels all pending delayed reveals.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    deck: Deck,
    turns: u32,
    first_pick: Option<CardId>,
    second_pick: Option<CardId>,
    flip_locked: bool,
    outcome: Outcome,
    countdown: Countdown,
    scheduler: Scheduler,
    rng: GameRng,
    now_ms: u64,
}

impl Session {
    /// Create a session and deal the first game.
    #[must_use]
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let countdown = Countdown::new(config.initial_time_secs);
        let mut rng = GameRng::new(seed);

        // Placeholder deal; start_new replaces it from a forked stream.
        let deck = Deck::deal(&config.card_set, &mut rng);

        let mut session = Self {
            deck,
            config,
            turns: 0,
            first_pick: None,
            second_pick: None,
            flip_locked: false,
            outcome: Outcome::Ongoing,
            countdown,
            scheduler: Scheduler::new(),
            rng,
            now_ms: 0,
        };
        session.start_new();
        session
    }

    /// Deal a fresh deck and reset all gameplay state.
    ///
    /// Cancels every pending delayed reveal from the previous game, so a
    /// stale reveal can never mutate the new one.
    pub fn start_new(&mut self) {
        self.scheduler.cancel_all();

        let mut deal_rng = self.rng.fork();
        self.deck = Deck::deal(&self.config.card_set, &mut deal_rng);
        self.turns = 0;
        self.first_pick = None;
        self.second_pick = None;
        self.flip_locked = false;
        self.outcome = Outcome::Ongoing;
        self.countdown.start();

        debug!(
            cards = self.deck.len(),
            seed = deal_rng.seed(),
            mode = %self.config.mode,
            "dealt new game"
        );
    }

    /// Reset the countdown to its initial value, then deal a fresh game.
    pub fn restart(&mut self) {
        info!(turns = self.turns, outcome = %self.outcome, "restarting session");
        self.countdown.reset();
        self.start_new();
    }

    /// Handle a card selection from the grid.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        if self.outcome.is_terminal() {
            return SelectOutcome::Rejected(Rejection::SessionOver);
        }
        if self.flip_locked {
            return SelectOutcome::Rejected(Rejection::FlipLocked);
        }

        let card = match self.deck.get(id) {
            Some(card) => *card,
            None => return SelectOutcome::Rejected(Rejection::UnknownCard),
        };
        if card.matched {
            return SelectOutcome::Rejected(Rejection::AlreadyMatched);
        }
        if self.first_pick == Some(id) {
            return SelectOutcome::Rejected(Rejection::AlreadyPicked);
        }

        match self.first_pick {
            None => {
                self.first_pick = Some(id);
                debug!(card = %id, "first pick");
                SelectOutcome::FirstPick
            }
            Some(first) => {
                self.second_pick = Some(id);
                debug!(card = %id, "second pick");
                self.resolve_picks(first, id)
            }
        }
    }

    /// Advance the logical clock: tick the countdown, fire due reveals.
    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms += delta_ms;

        let expired = self.countdown.tick(delta_ms);
        if expired && self.config.mode == GameMode::Timed {
            self.react_to_time_expiry();
        }

        for task in self.scheduler.due(self.now_ms) {
            match task.kind {
                TaskKind::MismatchReveal => self.finish_turn(),
                TaskKind::OutcomeReveal(outcome) => {
                    info!(turns = self.turns, outcome = %outcome, "session ended");
                    self.outcome = outcome;
                }
            }
        }
    }

    // === Resolution ===

    fn resolve_picks(&mut self, first: CardId, second: CardId) -> SelectOutcome {
        self.flip_locked = true;

        let first_pair = self.deck.get(first).map(|c| c.pair);
        let second_pair = self.deck.get(second).map(|c| c.pair);

        match (first_pair, second_pair) {
            (Some(pair), Some(other)) if pair == other => {
                self.deck.mark_pair_matched(pair);
                debug!(%pair, matched = self.deck.matched_count(), "pair matched");

                self.react_to_deck_change();
                self.finish_turn();
                SelectOutcome::Matched
            }
            _ => {
                // Leave both picks face-up until the reveal delay fires.
                self.scheduler.schedule(
                    self.now_ms + self.config.mismatch_reveal_ms,
                    TaskKind::MismatchReveal,
                );
                SelectOutcome::Mismatch
            }
        }
    }

    /// Clear picks, release the flip-lock, count the turn.
    fn finish_turn(&mut self) {
        self.first_pick = None;
        self.second_pick = None;
        self.flip_locked = false;
        self.turns += 1;
        self.react_to_turn_change();
    }

    // === Reactions (gated on the transition that can change the answer) ===

    fn react_to_deck_change(&mut self) {
        if self.outcome.is_terminal() || self.scheduler.outcome_pending() {
            return;
        }
        if self.deck.all_matched() {
            // Pause immediately so the countdown cannot expire inside the
            // reveal window; the Won outcome lands after the delay.
            self.countdown.pause();
            self.scheduler.schedule(
                self.now_ms + self.config.outcome_reveal_ms,
                TaskKind::OutcomeReveal(Outcome::Won),
            );
        }
    }

    fn react_to_turn_change(&mut self) {
        if self.config.mode != GameMode::TurnLimited {
            return;
        }
        if self.outcome.is_terminal() || self.scheduler.outcome_pending() {
            return;
        }
        if self.turns >= self.config.turn_limit {
            self.scheduler.schedule(
                self.now_ms + self.config.outcome_reveal_ms,
                TaskKind::OutcomeReveal(Outcome::Lost(LossReason::OutOfTurns)),
            );
        }
    }

    fn react_to_time_expiry(&mut self) {
        if self.outcome.is_terminal() || self.scheduler.outcome_pending() {
            return;
        }
        self.scheduler.schedule(
            self.now_ms + self.config.outcome_reveal_ms,
            TaskKind::OutcomeReveal(Outcome::Lost(LossReason::OutOfTime)),
        );
    }

    // === Accessors ===

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The selected rule set.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// The dealt deck, in display order.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Completed turns (pairs of picks resolved).
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The current first pick, if any.
    #[must_use]
    pub fn first_pick(&self) -> Option<CardId> {
        self.first_pick
    }

    /// The current second pick, if any.
    #[must_use]
    pub fn second_pick(&self) -> Option<CardId> {
        self.second_pick
    }

    /// Is a card one of the current picks?
    #[must_use]
    pub fn is_pick(&self, id: CardId) -> bool {
        self.first_pick == Some(id) || self.second_pick == Some(id)
    }

    /// Is the flip-lock engaged?
    #[must_use]
    pub fn flip_locked(&self) -> bool {
        self.flip_locked
    }

    /// The session outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The countdown collaborator.
    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Pending delayed reveals (for diagnostics and tests).
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// The logical clock, in milliseconds since session creation.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
