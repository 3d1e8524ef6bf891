//! Alpha-beta bounds.

/// The `(alpha, beta)` window carried down a search path.
///
/// `alpha` is the value the maximizer is already guaranteed, `beta` the
/// value the minimizer is already guaranteed. Bounds only narrow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub alpha: f64,
    pub beta: f64,
}

impl Window {
    /// The unbounded root window `(-inf, +inf)`.
    #[must_use]
    pub fn full() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }

    /// A maximizer found `value`: the minimizer above will never allow it.
    #[must_use]
    pub fn fails_high(&self, value: f64) -> bool {
        value >= self.beta
    }

    /// A minimizer found `value`: the maximizer above will never allow it.
    #[must_use]
    pub fn fails_low(&self, value: f64) -> bool {
        value <= self.alpha
    }

    /// Raise alpha to `value` if it is higher.
    pub fn raise_alpha(&mut self, value: f64) {
        self.alpha = self.alpha.max(value);
    }

    /// Lower beta to `value` if it is lower.
    pub fn lower_beta(&mut self, value: f64) {
        self.beta = self.beta.min(value);
    }
}
