//! Turn ownership after an action.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// What happens to turn ownership once an action has been applied.
///
/// Games with variable-length turns (placing two pieces, extra move after a
/// capture) report `SamePlayerContinues` for every action that does not end
/// the mover's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnTransition {
    /// The player who just moved also moves next.
    SamePlayerContinues,
    /// The move passes to the other participant.
    TurnPasses,
}

impl TurnTransition {
    /// Derive the transition from who just moved and who moves next.
    #[must_use]
    pub fn between(last_mover: PlayerId, next_mover: PlayerId) -> Self {
        if last_mover == next_mover {
            Self::SamePlayerContinues
        } else {
            Self::TurnPasses
        }
    }
}
