//! Error types for implied volatility calculation.

use std::fmt;

use crate::pricing::PricingError;

/// Errors specific to IV calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum IVError {
    /// Invalid input parameters for IV calculation.
    InvalidParams {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Solver configuration cannot be used (empty bracket, bad tolerance).
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// No volatility in the search bracket reproduces the market price.
    ///
    /// Happens when the price is below the zero-volatility value (intrinsic on
    /// the discounted strike) or above the price at the maximum volatility.
    RootNotBracketed {
        /// Market price requested.
        market_price: f64,
        /// Model price at the lower volatility bound.
        min_price: f64,
        /// Model price at the upper volatility bound.
        max_price: f64,
    },

    /// Solver did not converge within max iterations.
    ConvergenceFailure {
        /// Number of iterations attempted.
        iterations: u32,
        /// Last IV estimate before giving up.
        last_iv: f64,
    },

    /// The pricing function returned NaN or an infinity during the search.
    NumericalFailure {
        /// Volatility at which the price was evaluated.
        volatility: f64,
        /// Residual returned.
        value: f64,
    },
}

impl IVError {
    /// Returns true when the search itself failed: the market price has no
    /// volatility in the bracket, or the iteration budget ran out.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(
            self,
            IVError::RootNotBracketed { .. } | IVError::ConvergenceFailure { .. }
        )
    }
}

impl fmt::Display for IVError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IVError::InvalidParams { message } => {
                write!(f, "invalid parameters: {message}")
            }
            IVError::InvalidConfig { message } => {
                write!(f, "invalid solver configuration: {message}")
            }
            IVError::RootNotBracketed {
                market_price,
                min_price,
                max_price,
            } => {
                write!(
                    f,
                    "price {market_price:.6} is outside the attainable range [{min_price:.6}, {max_price:.6}]"
                )
            }
            IVError::ConvergenceFailure {
                iterations,
                last_iv,
            } => {
                write!(
                    f,
                    "solver did not converge after {iterations} iterations, last IV: {last_iv:.4}"
                )
            }
            IVError::NumericalFailure { volatility, value } => {
                write!(
                    f,
                    "pricing returned non-finite value {value} at volatility {volatility}"
                )
            }
        }
    }
}

impl std::error::Error for IVError {}

impl From<PricingError> for IVError {
    fn from(error: PricingError) -> Self {
        IVError::InvalidParams {
            message: error.to_string(),
        }
    }
}
