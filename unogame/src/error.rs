use thiserror::Error;

use crate::card::{Card, PlayedCard};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("At least 2 players are required, got {count}")]
    InvalidPlayerCount { count: usize },
    #[error("Hand size must be at least 1")]
    InvalidHandSize,
    #[error("Not enough cards to deal {hand_size} cards to {players} players")]
    DeckTooSmall { players: usize, hand_size: usize },
    #[error("{card} cannot be played on {active}")]
    IllegalMove { card: Card, active: PlayedCard },
    #[error("{0} is not in your hand")]
    CardNotInHand(Card),
    #[error("It is not player {player}'s turn, player {current} is up")]
    NotYourTurn { player: usize, current: usize },
    #[error("There is no player {0}")]
    UnknownPlayer(usize),
    #[error("A color must be chosen when playing {0}")]
    ColorChoiceRequired(Card),
    #[error("{0} already has a color, no color can be chosen")]
    UnexpectedColorChoice(Card),
    #[error("The deck is out of cards")]
    EmptyDeck,
    #[error("The game is already over")]
    ActionAfterGameOver,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
