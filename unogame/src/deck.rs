use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;
use tracing::info;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
    error::{Result, UnoError},
};

/// Draw pile plus the discard pile it is refilled from.
///
/// Cards are drawn from the end of the draw pile; index 0 is the bottom.
#[derive(Debug, Clone)]
pub struct Deck {
    pub(crate) cards: Vec<Card>,
    pub(crate) discard: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::DrawTwo));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        Self {
            cards,
            discard: Vec::new(),
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw_one(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(UnoError::EmptyDeck)
    }

    /// Draws one card, refilling from the discard pile when the draw pile runs out.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card> {
        match self.draw_one() {
            Err(UnoError::EmptyDeck) => {
                if self.replenish(rng) {
                    self.draw_one()
                } else {
                    Err(UnoError::EmptyDeck)
                }
            }
            result => result,
        }
    }

    /// Draws exactly `count` cards or nothing at all.
    pub fn draw_many<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<Vec<Card>> {
        if count > self.available() {
            return Err(UnoError::EmptyDeck);
        }

        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            cards.push(self.draw(rng)?);
        }
        Ok(cards)
    }

    /// Shuffles the discard pile back in as the new draw pile.
    ///
    /// Returns `false` if there was nothing to move.
    pub fn replenish<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.discard.is_empty() {
            return false;
        }

        info!(cards = self.discard.len(), "Reshuffling discard pile into the deck");
        self.cards.append(&mut self.discard);
        self.cards.shuffle(rng);
        true
    }

    pub fn insert_at_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    pub fn cards_count(&self) -> usize {
        self.cards.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    pub fn available(&self) -> usize {
        self.cards.len() + self.discard.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
