//! Search failures.

use thiserror::Error;

/// Errors surfaced by a search.
///
/// None of these are retried: the search is deterministic, so running it
/// again cannot produce a different outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The root is not a cutoff state but generated no successors.
    #[error("no legal moves from the root state")]
    NoLegalMoves,

    /// The root is already terminal or beyond the horizon, so no action
    /// can be chosen from it.
    #[error("root state is a cutoff state, no action to choose")]
    RootIsCutoff,

    /// The configured horizon is negative, non-finite or out of range.
    #[error("invalid search horizon: {0}")]
    InvalidHorizon(String),

    /// The strategy's cutoff answered differently for the same state and depth.
    #[error("cutoff is not deterministic at depth {depth}")]
    CutoffMismatch { depth: u32 },

    /// The strategy's evaluation returned NaN.
    #[error("evaluation returned NaN at depth {depth}")]
    InvalidEvaluation { depth: u32 },
}
