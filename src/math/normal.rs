//! Standard normal distribution.
//!
//! Thin wrapper over [`statrs`] so that the pricing formulas read as
//! `φ(x)` / `Φ(x)` and never depend on a particular distribution instance.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Standard normal distribution (mean 0, standard deviation 1).
///
/// Zero-sized and stateless: every call builds the (two-field) `statrs`
/// distribution on the stack, so there is nothing to initialise or share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardNormal;

impl StandardNormal {
    /// Probability density φ(x).
    #[must_use]
    #[inline]
    pub fn density(x: f64) -> f64 {
        Normal::standard().pdf(x)
    }

    /// Cumulative distribution Φ(x) = P(Z ≤ x).
    ///
    /// Evaluated through the complementary error function, which keeps full
    /// relative precision deep in the lower tail where out-of-the-money
    /// prices live.
    #[must_use]
    #[inline]
    pub fn cdf(x: f64) -> f64 {
        Normal::standard().cdf(x)
    }
}
