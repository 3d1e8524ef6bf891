//! Rules engine trait for game implementations.

use crate::core::{PlayerId, TurnTransition};

/// Rules engine trait.
///
/// Games implement this trait to define their rules. It is the narrow
/// contract the search collaborates with: everything else about a game
/// (rendering, file formats, clocks) stays outside.
///
/// ## Implementation Notes
///
/// - `legal_actions`: order matters, ties are broken by enumeration order
/// - `apply_action`: mutates the state it is given; callers pass a copy
/// - `utility`: higher is better for `player`
/// - `last_mover == next_mover` means the same player moves again
pub trait RulesEngine {
    /// Game state. Cloning must produce a fully independent copy.
    type State: Clone;

    /// Action token.
    type Action: Clone;

    /// Get legal actions for a player, in a stable order.
    ///
    /// Returns empty if the player has no legal actions.
    fn legal_actions(&self, state: &Self::State, player: PlayerId) -> Vec<Self::Action>;

    /// Apply an action to the game state.
    ///
    /// Must be deterministic.
    fn apply_action(&self, state: &mut Self::State, action: &Self::Action, player: PlayerId);

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Utility of `state` for `player`.
    fn utility(&self, state: &Self::State, player: PlayerId) -> f64;

    /// Player whose action produced `state`.
    fn last_mover(&self, state: &Self::State) -> PlayerId;

    /// Player to act in `state`.
    fn next_mover(&self, state: &Self::State) -> PlayerId;

    // === Convenience Methods ===

    /// Whether the player who produced `state` also moves next.
    fn turn_transition(&self, state: &Self::State) -> TurnTransition {
        TurnTransition::between(self.last_mover(state), self.next_mover(state))
    }

    /// Apply an action to a copy of `state`, leaving `state` untouched.
    fn successor(&self, state: &Self::State, action: &Self::Action, player: PlayerId) -> Self::State {
        let mut next = state.clone();
        self.apply_action(&mut next, action, player);
        next
    }
}
