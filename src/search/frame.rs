//! Folding child values into a frame.
//!
//! Shared by the recursive and the explicit-stack engines so that both
//! apply exactly the same update, tie-break and pruning rules.

use super::turn::Mode;
use super::window::Window;

/// Whether a frame keeps exploring siblings after absorbing a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Cutoff,
}

/// Running best of one search frame.
#[derive(Debug)]
pub(crate) struct Frame<A> {
    mode: Mode,
    window: Window,
    pruning: bool,
    best: f64,
    action: Option<A>,
}

impl<A> Frame<A> {
    pub(crate) fn new(mode: Mode, window: Window, pruning: bool) -> Self {
        Self {
            mode,
            window,
            pruning,
            best: mode.worst(),
            action: None,
        }
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    /// Bounds handed to the next child.
    pub(crate) fn window(&self) -> Window {
        self.window
    }

    /// No child has been absorbed.
    pub(crate) fn is_empty(&self) -> bool {
        self.action.is_none()
    }

    /// Fold the value of the child reached by `action`.
    ///
    /// Only a strict improvement replaces the current best, so among equal
    /// values the earliest action stays. The first child is always recorded,
    /// even at the sentinel value, so a frame with successors always has an
    /// action. Pruning checks are inclusive: `v >= beta` at a max frame,
    /// `v <= alpha` at a min frame.
    pub(crate) fn absorb(&mut self, action: A, value: f64) -> Flow {
        if !self.mode.improves(value, self.best) && self.action.is_some() {
            return Flow::Continue;
        }
        self.best = value;
        self.action = Some(action);

        if !self.pruning {
            return Flow::Continue;
        }
        match self.mode {
            Mode::Max => {
                if self.window.fails_high(value) {
                    return Flow::Cutoff;
                }
                self.window.raise_alpha(value);
            }
            Mode::Min => {
                if self.window.fails_low(value) {
                    return Flow::Cutoff;
                }
                self.window.lower_beta(value);
            }
        }
        Flow::Continue
    }

    /// The frame's value and the action achieving it.
    pub(crate) fn finish(self) -> (f64, Option<A>) {
        (self.best, self.action)
    }
}
