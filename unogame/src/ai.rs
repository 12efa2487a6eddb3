use rand::{seq::SliceRandom, Rng};

use crate::card::{Card, CardColor};
use crate::snapshot::Snapshot;
use crate::turn::TurnAction;

const COLORS: [CardColor; 4] = [
    CardColor::Red,
    CardColor::Yellow,
    CardColor::Green,
    CardColor::Blue,
];

/// Picks uniformly among the playable cards of its own hand, drawing only when none is playable.
///
/// Works from a [`Snapshot`], so it sees exactly what a seated player would.
#[derive(Debug, Clone)]
pub struct RandomPlayer<R> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn choose_action(&mut self, view: &Snapshot) -> TurnAction {
        let playable: Vec<&Card> = view
            .hand
            .iter()
            .filter(|card| card.can_be_played_on(&view.active_card))
            .collect();

        match playable.choose(&mut self.rng) {
            Some(card) if card.is_wild() => TurnAction::play_wild(**card, self.choose_color()),
            Some(card) => TurnAction::play(**card),
            None => TurnAction::Draw,
        }
    }

    pub fn choose_color(&mut self) -> CardColor {
        COLORS[self.rng.gen_range(0..COLORS.len())]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{ColoredCard, PlayedCard};
    use crate::uno::{Direction, GameStatus};

    fn view(hand: Vec<Card>, active_card: PlayedCard) -> Snapshot {
        Snapshot {
            active_card,
            current_player: 0,
            direction: Direction::Clockwise,
            players: vec![],
            viewer: 0,
            hand,
            deck_count: 0,
            discard_count: 0,
            status: GameStatus::InProgress,
        }
    }

    #[test]
    fn draws_when_nothing_is_playable() {
        let mut player = RandomPlayer::new(ChaCha8Rng::seed_from_u64(0));
        let view = view(
            vec![Card::Colored(CardColor::Blue, ColoredCard::Number(1))],
            PlayedCard::Colored(CardColor::Red, ColoredCard::Skip),
        );

        assert_eq!(player.choose_action(&view), TurnAction::Draw);
    }

    #[test]
    fn only_picks_legal_cards() {
        let mut player = RandomPlayer::new(ChaCha8Rng::seed_from_u64(1));
        let red_2 = Card::Colored(CardColor::Red, ColoredCard::Number(2));
        let view = view(
            vec![
                red_2,
                Card::Colored(CardColor::Blue, ColoredCard::Number(1)),
                Card::Colored(CardColor::Green, ColoredCard::Reverse),
            ],
            PlayedCard::Colored(CardColor::Red, ColoredCard::Skip),
        );

        for _ in 0..50 {
            assert_eq!(player.choose_action(&view), TurnAction::play(red_2));
        }
    }

    #[test]
    fn wilds_always_come_with_a_color() {
        let mut player = RandomPlayer::new(ChaCha8Rng::seed_from_u64(2));
        let view = view(
            vec![Card::Wild, Card::WildDrawFour],
            PlayedCard::Colored(CardColor::Red, ColoredCard::Skip),
        );

        for _ in 0..50 {
            match player.choose_action(&view) {
                TurnAction::Play { card, chosen_color } => {
                    assert!(card.is_wild());
                    assert!(chosen_color.is_some());
                }
                TurnAction::Draw => panic!("a wild was playable"),
            }
        }
    }
}
