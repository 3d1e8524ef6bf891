//! Maximize/minimize mode and its resolution across actions.

use crate::core::TurnTransition;

/// Whose interests a frame serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The searching player: pick the highest value.
    Max,
    /// The opponent: pick the lowest value.
    Min,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Mode::Max => Mode::Min,
            Mode::Min => Mode::Max,
        }
    }

    /// Mode of a child frame, given the turn transition into it.
    ///
    /// Resolved per successor, so a player moving twice in a row stays in
    /// the same mode for both plies.
    #[must_use]
    pub fn resolve(self, transition: TurnTransition) -> Self {
        match transition {
            TurnTransition::SamePlayerContinues => self,
            TurnTransition::TurnPasses => self.opposite(),
        }
    }

    /// Starting value of a frame: the worst case for this mode.
    #[must_use]
    pub fn worst(self) -> f64 {
        match self {
            Mode::Max => f64::NEG_INFINITY,
            Mode::Min => f64::INFINITY,
        }
    }

    /// Whether `candidate` strictly beats `best`. Ties never win.
    #[must_use]
    pub fn improves(self, candidate: f64, best: f64) -> bool {
        match self {
            Mode::Max => candidate > best,
            Mode::Min => candidate < best,
        }
    }
}
