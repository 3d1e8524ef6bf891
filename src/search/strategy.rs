//! The capability set a search needs from its caller.

use crate::core::TurnTransition;

/// Policy object driving one search: how to branch, when to stop, how to score.
///
/// ## Implementation Notes
///
/// - `successors`: every yielded state must be independent of `state` and of
///   its siblings. Clone-then-apply, or persistent structures, both work.
///   Enumeration order decides ties: the first best action wins.
/// - `cutoff`: a pure function of `(state, depth)`. The engine ORs it with
///   the configured horizon, so strategies only need terminal detection.
/// - `evaluate`: always from the searching player's point of view. The
///   engine alternates maximize and minimize; never negate here.
/// - `transition`: whether the player who produced `state` moves again.
pub trait Strategy {
    /// Game state.
    type State;

    /// Action token, paired with the state it produces.
    type Action;

    /// Enumerate `(action, resulting state)` pairs from `state`.
    fn successors<'a>(
        &'a self,
        state: &'a Self::State,
    ) -> impl Iterator<Item = (Self::Action, Self::State)>;

    /// Whether recursion must stop at this frame.
    fn cutoff(&self, state: &Self::State, depth: u32) -> bool;

    /// Static utility of a cutoff state for the searching player.
    fn evaluate(&self, state: &Self::State) -> f64;

    /// Turn ownership after the action that produced `state`.
    fn transition(&self, state: &Self::State) -> TurnTransition;
}
