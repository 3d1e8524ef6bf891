//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! Depth-bounded Minimax with optional Alpha-Beta pruning:
//!
//! - **Strategy-driven**: callers supply a [`Strategy`] (successors, cutoff,
//!   evaluation, turn transition); the engine never looks inside states
//! - **Variable-length turns**: each successor's frame mode is resolved from
//!   its [`TurnTransition`](crate::core::TurnTransition), not from depth parity
//! - **Deterministic tie-break**: the first action reaching the best value wins
//! - **Two engines**: recursive, and an explicit frame stack with identical results
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rust_minimax::core::{Horizon, SearchConfig};
//! use rust_minimax::search::MinimaxSearch;
//!
//! let config = SearchConfig::new(Horizon::new(4)).with_pruning(true);
//! let mut search = MinimaxSearch::new(config);
//! let outcome = search.search(&state, &strategy)?;
//! println!("{:?} worth {}", outcome.action, outcome.value);
//! ```

pub mod error;
mod frame;
mod iterative;
pub mod minimax;
pub mod stats;
pub mod strategy;
pub mod turn;
pub mod window;

pub use error::SearchError;
pub use minimax::{choose_action, MinimaxSearch, SearchOutcome};
pub use stats::SearchStats;
pub use strategy::Strategy;
pub use turn::Mode;
pub use window::Window;
