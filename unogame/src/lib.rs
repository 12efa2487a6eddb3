//! Game-state engine for UNO-style card games.
//!
//! [`uno::Uno`] owns one game: the deck and discard pile, the players' hands, the active card,
//! the play direction and whose turn it is. A frontend drives it with [`turn::TurnAction`]s and
//! renders the [`turn::Outcome`] and [`snapshot::Snapshot`] it gets back.

pub mod ai;
pub mod card;
pub mod config;
pub mod constants;
pub mod deck;
pub mod effect;
pub mod error;
pub mod player;
pub mod snapshot;
pub mod turn;
pub mod uno;
