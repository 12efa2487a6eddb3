use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};
use unogame::{
    ai::RandomPlayer,
    config::GameConfig,
    error::UnoError,
    turn::{Outcome, TurnAction},
    uno::Uno,
};

#[derive(Debug, PartialEq, Eq)]
pub enum GameReport {
    Finished {
        winner: usize,
        name: String,
        turns: usize,
    },
    Unfinished {
        turns: usize,
    },
}

/// Plays one game to the end with a random player in every seat.
///
/// Gives up after `max_turns` actions.
pub fn play_game(
    player_names: Vec<String>,
    config: GameConfig,
    max_turns: usize,
) -> Result<GameReport, UnoError> {
    let seed = config.seed;
    let player_count = player_names.len();
    let mut uno = Uno::with_config(player_names, config)?;

    let mut seats: Vec<RandomPlayer<ChaCha8Rng>> = (0..player_count)
        .map(|seat| {
            let rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(seat as u64 + 1)),
                None => ChaCha8Rng::from_entropy(),
            };
            RandomPlayer::new(rng)
        })
        .collect();

    for turn in 1..=max_turns {
        let current = uno.current_player_index();
        let action = seats[current].choose_action(&uno.snapshot());

        match uno.play_turn(current, action) {
            Outcome::Accepted { result, state } => {
                debug!(
                    turn,
                    player = %state.players[current].name,
                    action = %describe(&action),
                    ?result,
                    active_card = %state.active_card,
                    "Turn played"
                );
            }
            Outcome::GameOver { winner, name } => {
                info!(turns = turn, winner = %name, "Game finished");
                return Ok(GameReport::Finished {
                    winner,
                    name,
                    turns: turn,
                });
            }
            Outcome::Rejected(error) => return Err(error),
        }
    }

    warn!(max_turns, "Game did not finish");
    Ok(GameReport::Unfinished { turns: max_turns })
}

fn describe(action: &TurnAction) -> String {
    match action {
        TurnAction::Play {
            card,
            chosen_color: Some(color),
        } => format!("plays {card} as {color}"),
        TurnAction::Play { card, .. } => format!("plays {card}"),
        TurnAction::Draw => "draws".to_string(),
    }
}
