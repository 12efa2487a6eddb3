use crate::card::{Card, PlayedCard};
use crate::uno::{Direction, GameStatus};

/// What another player can see of a seat: the name and how many cards are held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub name: String,
    pub cards_count: usize,
}

/// Read-only view of the table for rendering.
///
/// `hand` holds the cards of the viewing player only; every other hand is reduced to a count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub active_card: PlayedCard,
    pub current_player: usize,
    pub direction: Direction,
    pub players: Vec<PlayerView>,
    pub viewer: usize,
    pub hand: Vec<Card>,
    pub deck_count: usize,
    pub discard_count: usize,
    pub status: GameStatus,
}

impl Snapshot {
    /// Cards on the table, in hands, in the deck and in the discard pile.
    pub fn total_cards(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.cards_count).sum();
        in_hands + self.deck_count + self.discard_count + 1
    }
}
