//! Core types: players, turn transitions, configuration, RNG.
//!
//! Everything here is game-agnostic. Games and strategies build on these
//! types; the search engine never looks further into a game than this.

pub mod config;
pub mod player;
pub mod rng;
pub mod turn;

pub use config::{Horizon, SearchConfig};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use turn::TurnTransition;
