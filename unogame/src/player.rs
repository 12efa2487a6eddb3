use crate::card::Card;

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    pub(crate) hand: Vec<Card>,
}

impl Player {
    pub fn new(name: String, cards: Vec<Card>) -> Self {
        Self { name, hand: cards }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }
}
