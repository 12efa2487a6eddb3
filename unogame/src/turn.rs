use crate::card::{Card, CardColor};
use crate::error::UnoError;
use crate::snapshot::Snapshot;

/// An action a player asks the engine to perform on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play {
        card: Card,
        chosen_color: Option<CardColor>,
    },
    Draw,
}

impl TurnAction {
    pub fn play(card: Card) -> Self {
        TurnAction::Play {
            card,
            chosen_color: None,
        }
    }

    pub fn play_wild(card: Card, color: CardColor) -> Self {
        TurnAction::Play {
            card,
            chosen_color: Some(color),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
    SelfDraw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Accepted {
        result: TurnActionResult,
        state: Snapshot,
    },
    Rejected(UnoError),
    GameOver {
        winner: usize,
        name: String,
    },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<&UnoError> {
        match self {
            Outcome::Rejected(error) => Some(error),
            _ => None,
        }
    }
}
