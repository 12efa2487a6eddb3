mod sim;

use std::collections::BTreeMap;

use clap::Parser;
use color_eyre::{eyre::ensure, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use unogame::{config::GameConfig, constants::DEFAULT_HAND_SIZE};

use crate::sim::{play_game, GameReport};

/// Plays unattended UNO games between random players and tallies the winners.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of players at the table
    #[arg(short, long, env = "UNO_PLAYERS", default_value_t = 4)]
    players: usize,

    /// Cards dealt to each player
    #[arg(long, env = "UNO_HAND_SIZE", default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Number of games to play
    #[arg(short, long, env = "UNO_GAMES", default_value_t = 1)]
    games: u64,

    /// Seed of the first game, game `i` uses `seed + i`
    #[arg(short, long, env = "UNO_SEED")]
    seed: Option<u64>,

    /// Actions after which a game is abandoned
    #[arg(long, env = "UNO_MAX_TURNS", default_value_t = 10_000)]
    max_turns: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    ensure!(args.max_turns > 0, "--max-turns must be at least 1");

    let player_names: Vec<String> = (1..=args.players).map(|i| format!("Player {i}")).collect();
    let mut wins: BTreeMap<String, u64> = BTreeMap::new();
    let mut unfinished = 0;
    let mut total_turns = 0;

    for game in 0..args.games {
        let config = GameConfig {
            hand_size: args.hand_size,
            seed: args.seed.map(|seed| seed.wrapping_add(game)),
        };
        info!(game = game + 1, seed = ?config.seed, "Starting game");

        match play_game(player_names.clone(), config, args.max_turns)? {
            GameReport::Finished { name, turns, .. } => {
                *wins.entry(name).or_default() += 1;
                total_turns += turns;
            }
            GameReport::Unfinished { turns } => {
                unfinished += 1;
                total_turns += turns;
            }
        }
    }

    println!("Played {} game(s), {} action(s) in total", args.games, total_turns);
    for name in &player_names {
        println!("{name}: {} win(s)", wins.get(name).copied().unwrap_or_default());
    }
    if unfinished > 0 {
        println!("{unfinished} game(s) hit the turn limit");
    }

    Ok(())
}
