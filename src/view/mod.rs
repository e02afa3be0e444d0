//! Presentational-children contract.
//!
//! Plain serde-friendly projections of session state for a rendering
//! frontend: the card grid (with each card's `face_up` flag), the
//! mode-dependent HUD, and the outcome modal. The frontend binds these
//! and forwards events back to `Session` methods; no logic lives here
//! beyond the projection itself.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, GameMode, PairId};
use crate::session::{Outcome, Session};

/// One card as the grid renders it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Instance ID, forwarded back on selection.
    pub id: CardId,

    /// The pair this card belongs to.
    pub pair: PairId,

    /// Face name (asset hint) from the card set.
    pub face: String,

    /// Face-up when the card is a current pick or already matched.
    pub face_up: bool,

    /// Pair already found.
    pub matched: bool,
}

/// Mode-dependent header state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HudView {
    /// Timed mode: the countdown display value.
    Timer { display: String },
    /// Turn-limited mode: "turns/limit".
    TurnsWithLimit { turns: u32, limit: u32 },
    /// Free play: bare turn count.
    Turns { turns: u32 },
}

/// Outcome modal state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalView {
    /// Modal is shown once the outcome is terminal.
    pub visible: bool,

    /// The outcome to present.
    pub outcome: Outcome,

    /// Turns taken, shown in the result text.
    pub turns: u32,
}

/// Everything the game page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Player display name for the greeting.
    pub player_name: String,

    /// Mode-dependent header.
    pub hud: HudView,

    /// Cards in display order.
    pub cards: Vec<CardView>,

    /// Outcome modal.
    pub modal: ModalView,
}

impl Session {
    /// Project the current state for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let cards = self
            .deck()
            .iter()
            .map(|card| CardView {
                id: card.id,
                pair: card.pair,
                face: self
                    .config()
                    .card_set
                    .face(card.pair)
                    .unwrap_or_default()
                    .to_string(),
                face_up: self.is_pick(card.id) || card.matched,
                matched: card.matched,
            })
            .collect();

        let hud = match self.mode() {
            GameMode::Timed => HudView::Timer {
                display: self.countdown().display(),
            },
            GameMode::TurnLimited => HudView::TurnsWithLimit {
                turns: self.turns(),
                limit: self.config().turn_limit,
            },
            GameMode::FreePlay => HudView::Turns {
                turns: self.turns(),
            },
        };

        SessionView {
            player_name: self.config().player_name.clone(),
            hud,
            cards,
            modal: ModalView {
                visible: self.outcome().is_terminal(),
                outcome: self.outcome(),
                turns: self.turns(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionConfig;

    fn session(mode: GameMode) -> Session {
        let config = SessionConfig::builder().mode(mode).build().unwrap();
        Session::new(config, 42)
    }

    #[test]
    fn test_fresh_view() {
        let view = session(GameMode::Timed).view();

        assert_eq!(view.player_name, "New Player");
        assert_eq!(view.cards.len(), 12);
        assert!(view.cards.iter().all(|c| !c.face_up && !c.matched));
        assert!(!view.modal.visible);
        assert_eq!(view.hud, HudView::Timer { display: "1:00".into() });
    }

    #[test]
    fn test_picks_are_face_up() {
        let mut session = session(GameMode::FreePlay);
        let id = session.deck().iter().next().unwrap().id;
        session.select_card(id);

        let view = session.view();
        let shown: Vec<_> = view.cards.iter().filter(|c| c.face_up).collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, id);
    }

    #[test]
    fn test_hud_per_mode() {
        assert!(matches!(
            session(GameMode::TurnLimited).view().hud,
            HudView::TurnsWithLimit { turns: 0, limit: 20 }
        ));
        assert!(matches!(
            session(GameMode::FreePlay).view().hud,
            HudView::Turns { turns: 0 }
        ));
    }

    #[test]
    fn test_card_faces_come_from_set() {
        let view = session(GameMode::FreePlay).view();
        let faces: std::collections::BTreeSet<_> =
            view.cards.iter().map(|c| c.face.as_str()).collect();

        assert!(faces.contains("bunny"));
        assert!(faces.contains("smoke"));
        assert_eq!(faces.len(), 6);
    }

    #[test]
    fn test_view_serializes() {
        let view = session(GameMode::Timed).view();
        let json = serde_json::to_string(&view).unwrap();
        let back: SessionView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, back);
    }
}
