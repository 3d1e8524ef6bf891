//! # rust-minimax
//!
//! A generic adversarial game-tree search engine: depth-bounded Minimax with
//! optional Alpha-Beta pruning for turn-based, perfect-information,
//! zero-sum games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine only sees a [`Strategy`]: successors,
//!    cutoff, evaluation and turn transition. States and actions are opaque.
//!
//! 2. **Variable-Length Turns**: Whether a player moves again is resolved
//!    per successor, so games with multi-move turns search correctly.
//!
//! 3. **Explicit Configuration**: The search horizon is always supplied by
//!    the caller via [`SearchConfig`]; there is no built-in default depth.
//!
//! ## Architecture
//!
//! - **Copy-on-branch**: Every successor is an independent state. Games use
//!   `im` persistent structures to keep that cheap.
//!
//! - **Deterministic**: Strict comparisons for value updates, inclusive ones
//!   for pruning; the first action reaching the best value wins.
//!
//! ## Modules
//!
//! - `core`: Player IDs, turn transitions, configuration, RNG
//! - `rules`: RulesEngine trait for game implementations
//! - `search`: Strategy trait, Minimax/Alpha-Beta engines, statistics, errors
//! - `agent`: RulesAgent, a search-driven player over any RulesEngine
//! - `games`: Reference games (explicit trees, take-away)

pub mod core;
pub mod rules;
pub mod search;
pub mod agent;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameRng, Horizon, PlayerId, PlayerMap, SearchConfig, TurnTransition};

pub use crate::rules::RulesEngine;

pub use crate::search::{
    choose_action, MinimaxSearch, Mode, SearchError, SearchOutcome, SearchStats, Strategy, Window,
};

pub use crate::agent::{AgentInfo, RulesAgent};
