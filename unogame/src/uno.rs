use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::card::{Card, CardColor, PlayedCard};
use crate::config::GameConfig;
use crate::constants::{MIN_PLAYERS, STARTER_CARDS_IN_DECK};
use crate::deck::Deck;
use crate::effect::Effect;
use crate::error::{Result, UnoError};
use crate::player::Player;
use crate::snapshot::{PlayerView, Snapshot};
use crate::turn::{Outcome, TurnAction, TurnActionResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    GameOver { winner: usize },
}

/// A single game of UNO, from the deal to the first empty hand.
///
/// Every operation either applies completely or is rejected without touching the table.
#[derive(Debug)]
pub struct Uno {
    pub(crate) deck: Deck,
    pub(crate) players: Vec<Player>,
    pub(crate) active_card: PlayedCard,
    pub(crate) direction: Direction,
    pub(crate) turn_index: usize,
    status: GameStatus,
    rng: ChaCha8Rng,
}

impl Uno {
    pub fn new(player_names: Vec<String>) -> Result<Self> {
        Self::with_config(player_names, GameConfig::default())
    }

    pub fn with_config(player_names: Vec<String>, config: GameConfig) -> Result<Self> {
        let player_count = player_names.len();
        if player_count < MIN_PLAYERS {
            return Err(UnoError::InvalidPlayerCount {
                count: player_count,
            });
        }
        if config.hand_size == 0 {
            return Err(UnoError::InvalidHandSize);
        }
        // At least one non-wild card has to survive the deal to open the game.
        let dealt = player_count.checked_mul(config.hand_size);
        if dealt.map_or(true, |dealt| dealt >= usize::from(STARTER_CARDS_IN_DECK)) {
            return Err(UnoError::DeckTooSmall {
                players: player_count,
                hand_size: config.hand_size,
            });
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut players = Vec::with_capacity(player_count);
        for player_name in player_names {
            let cards = deck.draw_many(config.hand_size, &mut rng)?;
            players.push(Player::new(player_name, cards));
        }

        let active_card = loop {
            match deck.draw_one()? {
                Card::Colored(color, card) => break card.into_played_card(color),
                wild => deck.insert_at_bottom(wild),
            }
        };

        info!(
            players = player_count,
            hand_size = config.hand_size,
            active_card = %active_card,
            "Game started"
        );

        Ok(Uno {
            deck,
            players,
            active_card,
            direction: Direction::Clockwise,
            turn_index: 0,
            status: GameStatus::InProgress,
            rng,
        })
    }

    pub fn play_turn(&mut self, player_index: usize, turn_action: TurnAction) -> Outcome {
        match turn_action {
            TurnAction::Play { card, chosen_color } => {
                self.play_card(player_index, card, chosen_color)
            }
            TurnAction::Draw => self.draw_card(player_index),
        }
    }

    /// Plays `card` from the hand of `player_index`.
    ///
    /// Wild cards need `chosen_color`, which becomes the color of the active card.
    pub fn play_card(
        &mut self,
        player_index: usize,
        card: Card,
        chosen_color: Option<CardColor>,
    ) -> Outcome {
        self.try_play_card(player_index, card, chosen_color)
            .unwrap_or_else(|error| self.reject(player_index, error))
    }

    /// Draws one card for `player_index` and ends their turn.
    pub fn draw_card(&mut self, player_index: usize) -> Outcome {
        self.try_draw_card(player_index)
            .unwrap_or_else(|error| self.reject(player_index, error))
    }

    fn try_play_card(
        &mut self,
        player_index: usize,
        card: Card,
        chosen_color: Option<CardColor>,
    ) -> Result<Outcome> {
        self.ensure_turn(player_index)?;

        let hand_card_index = self.players[player_index]
            .card_index(&card)
            .ok_or(UnoError::CardNotInHand(card))?;

        if !card.can_be_played_on(&self.active_card) {
            return Err(UnoError::IllegalMove {
                card,
                active: self.active_card,
            });
        }

        let played_card = card.bind_color(chosen_color)?;

        self.players[player_index].remove_card(hand_card_index);
        let previous_card = std::mem::replace(&mut self.active_card, played_card);
        self.deck.discard(previous_card.into_card());

        debug!(
            player = self.players[player_index].name(),
            card = %played_card,
            "Card played"
        );

        let turn_action_result = self.resolve_effect(Effect::from(&played_card));

        let player = &self.players[player_index];
        if player.has_won() {
            let name = player.name().to_string();
            info!(winner = %name, "Game over");
            self.status = GameStatus::GameOver {
                winner: player_index,
            };
            return Ok(Outcome::GameOver {
                winner: player_index,
                name,
            });
        }

        self.advance_turn();

        Ok(Outcome::Accepted {
            result: turn_action_result,
            state: self.snapshot(),
        })
    }

    fn try_draw_card(&mut self, player_index: usize) -> Result<Outcome> {
        self.ensure_turn(player_index)?;

        let drawn = self.draw_cards_to_player(player_index, 1);
        debug!(
            player = self.players[player_index].name(),
            drawn, "Card drawn"
        );

        self.advance_turn();

        Ok(Outcome::Accepted {
            result: TurnActionResult::SelfDraw,
            state: self.snapshot(),
        })
    }

    fn ensure_turn(&self, player_index: usize) -> Result<()> {
        if self.is_over() {
            return Err(UnoError::ActionAfterGameOver);
        }
        if player_index >= self.players.len() {
            return Err(UnoError::UnknownPlayer(player_index));
        }
        if player_index != self.turn_index {
            return Err(UnoError::NotYourTurn {
                player: player_index,
                current: self.turn_index,
            });
        }
        Ok(())
    }

    fn reject(&self, player_index: usize, error: UnoError) -> Outcome {
        debug!(player = player_index, %error, "Action rejected");
        Outcome::Rejected(error)
    }

    /// Every action the current player may take, with wilds offered in each color.
    pub fn legal_actions(&self) -> Vec<TurnAction> {
        if self.is_over() {
            return vec![];
        }

        let mut actions = Vec::new();
        for card in self.current_player().hand() {
            if !card.can_be_played_on(&self.active_card) {
                continue;
            }

            let candidates: Vec<TurnAction> = if card.is_wild() {
                CardColor::iter()
                    .map(|color| TurnAction::play_wild(*card, color))
                    .collect()
            } else {
                vec![TurnAction::play(*card)]
            };

            for action in candidates {
                if !actions.contains(&action) {
                    actions.push(action);
                }
            }
        }
        actions.push(TurnAction::Draw);

        actions
    }

    pub fn legal_to_play(&self, card: &Card) -> bool {
        card.can_be_played_on(&self.active_card)
    }

    /// The table as seen by the player whose turn it is.
    pub fn snapshot(&self) -> Snapshot {
        self.build_snapshot(self.turn_index)
    }

    /// The table as seen by `viewer`, who only gets to see their own hand.
    pub fn snapshot_for(&self, viewer: usize) -> Result<Snapshot> {
        if viewer >= self.players.len() {
            return Err(UnoError::UnknownPlayer(viewer));
        }
        Ok(self.build_snapshot(viewer))
    }

    fn build_snapshot(&self, viewer: usize) -> Snapshot {
        Snapshot {
            active_card: self.active_card,
            current_player: self.turn_index,
            direction: self.direction,
            players: self
                .players
                .iter()
                .map(|player| PlayerView {
                    name: player.name().to_string(),
                    cards_count: player.cards_count(),
                })
                .collect(),
            viewer,
            hand: self.players[viewer].hand().to_vec(),
            deck_count: self.deck.cards_count(),
            discard_count: self.deck.discard_count(),
            status: self.status,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, player_index: usize) -> Option<&Player> {
        self.players.get(player_index)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn_index]
    }

    pub fn current_player_index(&self) -> usize {
        self.turn_index
    }

    pub fn next_player_index(&self) -> usize {
        self.nth_player_index(1)
    }

    pub fn active_card(&self) -> &PlayedCard {
        &self.active_card
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::GameOver { winner } => self.players.get(winner),
            GameStatus::InProgress => None,
        }
    }

    /// Moves up to `count` cards from the deck into a hand, returning how many arrived.
    ///
    /// Fewer than `count` only when both the deck and the discard pile are empty.
    pub(crate) fn draw_cards_to_player(&mut self, player_index: usize, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            match self.deck.draw(&mut self.rng) {
                Ok(card) => self.players[player_index].add_card(card),
                Err(_) => break,
            }
            drawn += 1;
        }
        drawn
    }

    fn nth_player_index(&self, n: usize) -> usize {
        let player_count = self.players.len();
        let n = n % player_count;
        match self.direction {
            Direction::Clockwise => (self.turn_index + n) % player_count,
            Direction::CounterClockwise => (self.turn_index + player_count - n) % player_count,
        }
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn_index = self.nth_player_index(1);
    }
}
