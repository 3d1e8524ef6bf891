//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Frames entered, cutoff frames included.
    pub frames: u64,

    /// Calls to the strategy's `evaluate`.
    pub evaluations: u64,

    /// Alpha or beta cutoffs that skipped remaining siblings.
    pub cutoffs: u64,

    /// Non-root frames that were not cut off but had no successors.
    pub dead_ends: u64,

    /// Deepest frame reached.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record entry into a frame at `depth`.
    pub(crate) fn enter(&mut self, depth: u32) {
        self.frames += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate frames per second.
    #[must_use]
    pub fn frames_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.frames as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Counters only, without timing, for comparing two searches.
    #[must_use]
    pub fn counters(&self) -> (u64, u64, u64, u64, u32) {
        (self.frames, self.evaluations, self.cutoffs, self.dead_ends, self.max_depth)
    }
}
