use tracing::{debug, warn};

use crate::card::{ColoredCard, PlayedCard};
use crate::constants::{DRAW_FOUR_PENALTY, DRAW_TWO_PENALTY, MIN_PLAYERS};
use crate::turn::TurnActionResult;
use crate::uno::Uno;

/// What a card does to the table once it becomes the active card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    ChooseColor,
    DrawTwo,
    DrawFour,
    Reverse,
    Skip,
}

impl From<&PlayedCard> for Effect {
    fn from(card: &PlayedCard) -> Self {
        match card {
            PlayedCard::Colored(_, ColoredCard::Number(_)) => Effect::None,
            PlayedCard::Colored(_, ColoredCard::Skip) => Effect::Skip,
            PlayedCard::Colored(_, ColoredCard::Reverse) => Effect::Reverse,
            PlayedCard::Colored(_, ColoredCard::DrawTwo) => Effect::DrawTwo,
            PlayedCard::Wild(_) => Effect::ChooseColor,
            PlayedCard::WildDrawFour(_) => Effect::DrawFour,
        }
    }
}

impl Uno {
    /// Applies `effect` before the regular end-of-turn advance.
    ///
    /// Skip moves the turn one extra seat here so that the regular advance lands past the
    /// skipped player. Forced draws hit the next player in the current direction.
    pub(crate) fn resolve_effect(&mut self, effect: Effect) -> TurnActionResult {
        match effect {
            Effect::None => TurnActionResult::Neutral,
            Effect::ChooseColor => TurnActionResult::Wild,
            Effect::DrawTwo => {
                self.force_draw(self.next_player_index(), DRAW_TWO_PENALTY);
                TurnActionResult::DrawTwo
            }
            Effect::DrawFour => {
                self.force_draw(self.next_player_index(), DRAW_FOUR_PENALTY);
                TurnActionResult::WildDrawFour
            }
            Effect::Reverse => {
                self.direction = self.direction.reversed();
                // Heads-up play: reversing hands the turn straight back.
                if self.players.len() == MIN_PLAYERS {
                    self.advance_turn();
                }
                debug!(direction = ?self.direction, "Play direction reversed");
                TurnActionResult::Reverse
            }
            Effect::Skip => {
                debug!(
                    player = self.players[self.next_player_index()].name(),
                    "Player skipped"
                );
                self.advance_turn();
                TurnActionResult::Skip
            }
        }
    }

    fn force_draw(&mut self, player_index: usize, count: usize) {
        let drawn = self.draw_cards_to_player(player_index, count);
        if drawn < count {
            warn!(
                player = self.players[player_index].name(),
                drawn, count, "Deck and discard pile ran out during a forced draw"
            );
        } else {
            debug!(player = self.players[player_index].name(), count, "Forced draw");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardColor;

    #[test]
    fn effect_follows_card_value() {
        let red = CardColor::Red;
        assert_eq!(
            Effect::from(&PlayedCard::Colored(red, ColoredCard::Number(4))),
            Effect::None
        );
        assert_eq!(
            Effect::from(&PlayedCard::Colored(red, ColoredCard::Skip)),
            Effect::Skip
        );
        assert_eq!(
            Effect::from(&PlayedCard::Colored(red, ColoredCard::Reverse)),
            Effect::Reverse
        );
        assert_eq!(
            Effect::from(&PlayedCard::Colored(red, ColoredCard::DrawTwo)),
            Effect::DrawTwo
        );
        assert_eq!(Effect::from(&PlayedCard::Wild(red)), Effect::ChooseColor);
        assert_eq!(Effect::from(&PlayedCard::WildDrawFour(red)), Effect::DrawFour);
    }
}
