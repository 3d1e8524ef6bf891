//! Search configuration.
//!
//! Callers configure each search with:
//! - `Horizon`: how far below the root the engine may recurse
//! - pruning on/off
//! - optional consistency checks on the strategy's cutoff predicate
//!
//! There is deliberately no default horizon. Different games need
//! different lookahead, so every `SearchConfig` names one explicitly.

use serde::{Deserialize, Serialize};

use crate::search::SearchError;

/// Maximum search depth.
///
/// A frame at `depth` is cut off once `depth > horizon`. Horizon 0 expands
/// the root and evaluates each successor statically; horizon 1 lets every
/// root successor be answered by one more move, and so on.
///
/// Constructed only through validating conversions, so a negative or
/// non-finite depth never reaches the engine.
///
/// ```
/// use rust_minimax::core::Horizon;
///
/// let h = Horizon::try_from(2_i64).unwrap();
/// assert!(!h.exceeded(2));
/// assert!(h.exceeded(3));
/// assert!(Horizon::try_from(-1_i64).is_err());
/// assert!(Horizon::try_from(f64::INFINITY).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Horizon(u32);

impl Horizon {
    /// Create a horizon from an unsigned depth.
    #[must_use]
    pub const fn new(depth: u32) -> Self {
        Self(depth)
    }

    /// The configured depth.
    #[must_use]
    pub const fn depth(self) -> u32 {
        self.0
    }

    /// Whether a frame at `depth` lies beyond this horizon.
    #[must_use]
    pub const fn exceeded(self, depth: u32) -> bool {
        depth > self.0
    }
}

impl TryFrom<i64> for Horizon {
    type Error = SearchError;

    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        u32::try_from(depth)
            .map(Self)
            .map_err(|_| SearchError::InvalidHorizon(format!("depth {depth} is out of range")))
    }
}

impl TryFrom<f64> for Horizon {
    type Error = SearchError;

    fn try_from(depth: f64) -> Result<Self, Self::Error> {
        if !depth.is_finite() {
            return Err(SearchError::InvalidHorizon(format!("depth {depth} is not finite")));
        }
        if depth.fract() != 0.0 {
            return Err(SearchError::InvalidHorizon(format!("depth {depth} is not whole")));
        }
        if depth < 0.0 || depth > f64::from(u32::MAX) {
            return Err(SearchError::InvalidHorizon(format!("depth {depth} is out of range")));
        }
        Ok(Self(depth as u32))
    }
}

impl From<Horizon> for u32 {
    fn from(horizon: Horizon) -> Self {
        horizon.0
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Horizon({})", self.0)
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum search depth, OR'ed with the strategy's own cutoff.
    pub horizon: Horizon,

    /// Enable alpha-beta pruning.
    /// Disabled means exhaustive minimax with identical root value.
    pub pruning: bool,

    /// Query the strategy's cutoff twice per frame and fail on disagreement.
    /// Catches non-deterministic cutoff predicates at the cost of extra calls.
    #[serde(default)]
    pub check_cutoff: bool,
}

impl SearchConfig {
    /// Create a config with the given horizon, pruning enabled.
    #[must_use]
    pub fn new(horizon: Horizon) -> Self {
        Self {
            horizon,
            pruning: true,
            check_cutoff: false,
        }
    }

    /// Create a config from a raw depth, rejecting invalid values.
    pub fn with_depth(depth: i64) -> Result<Self, SearchError> {
        Ok(Self::new(Horizon::try_from(depth)?))
    }

    /// Set a custom horizon.
    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Enable or disable cutoff consistency checks.
    pub fn with_cutoff_checks(mut self, check: bool) -> Self {
        self.check_cutoff = check;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = SearchConfig::new(Horizon::new(3));
        assert_eq!(config.horizon.depth(), 3);
        assert!(config.pruning);
        assert!(!config.check_cutoff);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::new(Horizon::new(1))
            .with_horizon(Horizon::new(4))
            .with_pruning(false)
            .with_cutoff_checks(true);

        assert_eq!(config.horizon, Horizon::new(4));
        assert!(!config.pruning);
        assert!(config.check_cutoff);
    }

    #[test]
    fn test_with_depth_rejects_negative() {
        let err = SearchConfig::with_depth(-2).unwrap_err();
        assert!(matches!(err, SearchError::InvalidHorizon(_)));
        assert!(SearchConfig::with_depth(0).is_ok());
    }

    #[test]
    fn test_horizon_from_f64() {
        assert_eq!(Horizon::try_from(3.0).unwrap(), Horizon::new(3));
        assert!(Horizon::try_from(f64::NAN).is_err());
        assert!(Horizon::try_from(f64::NEG_INFINITY).is_err());
        assert!(Horizon::try_from(-0.5).is_err());
        assert!(Horizon::try_from(1.5).is_err());
    }

    #[test]
    fn test_horizon_exceeded() {
        let zero = Horizon::new(0);
        assert!(!zero.exceeded(0));
        assert!(zero.exceeded(1));
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::new(Horizon::new(5)).with_pruning(false);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialization_validates_horizon() {
        let result: Result<SearchConfig, _> =
            serde_json::from_str(r#"{"horizon": -1, "pruning": true}"#);
        assert!(result.is_err());

        let config: SearchConfig =
            serde_json::from_str(r#"{"horizon": 2, "pruning": true}"#).unwrap();
        assert_eq!(config.horizon, Horizon::new(2));
        assert!(!config.check_cutoff);
    }
}
