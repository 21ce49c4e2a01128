//! Bracketed Newton-Raphson root finder with bisection fallback.
//!
//! Each iteration tries a Newton step `x - f(x)/f'(x)`. The step is taken only
//! if it lands strictly inside the current bracket and at least halves the
//! previous step; otherwise the bracket is bisected. The bracket always keeps a
//! sign change, so the search converges even when `f'` is a poor estimate of
//! the true derivative.

use std::fmt;
use tracing::trace;

/// Configuration for [`find_root`].
#[derive(Debug, Clone)]
pub struct RootFinderConfig {
    /// Absolute tolerance on `|f(x)|` and on the bracket width.
    pub tolerance: f64,
    /// Maximum iterations before giving up.
    pub max_iterations: u32,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

impl RootFinderConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Location of the root.
    pub value: f64,
    /// `f(value)`, within tolerance of zero unless the bracket collapsed first.
    pub residual: f64,
    /// Iterations used after the initial midpoint evaluation.
    pub iterations: u32,
}

/// Failures reported by [`find_root`].
#[derive(Debug, Clone, PartialEq)]
pub enum RootFinderError {
    /// Bounds are not finite or not ordered.
    InvalidBracket {
        /// Lower bound supplied.
        lower: f64,
        /// Upper bound supplied.
        upper: f64,
    },

    /// Tolerance is not a positive finite number.
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// `f(lower)` and `f(upper)` have the same sign.
    NotBracketed {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
        /// `f(lower)`.
        f_lower: f64,
        /// `f(upper)`.
        f_upper: f64,
    },

    /// The function returned NaN or an infinity.
    NonFiniteValue {
        /// Argument at which the function was evaluated.
        x: f64,
        /// Value returned.
        value: f64,
    },

    /// Iteration budget exhausted without convergence.
    MaxIterationsExceeded {
        /// Number of iterations attempted.
        iterations: u32,
        /// Best estimate when the search stopped.
        last_estimate: f64,
    },
}

impl fmt::Display for RootFinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootFinderError::InvalidBracket { lower, upper } => {
                write!(f, "invalid bracket [{lower}, {upper}]")
            }
            RootFinderError::InvalidConfig { message } => {
                write!(f, "invalid root finder configuration: {message}")
            }
            RootFinderError::NotBracketed {
                lower,
                upper,
                f_lower,
                f_upper,
            } => {
                write!(
                    f,
                    "no sign change in [{lower}, {upper}]: f(lower) = {f_lower:.6e}, f(upper) = {f_upper:.6e}"
                )
            }
            RootFinderError::NonFiniteValue { x, value } => {
                write!(f, "function returned non-finite value {value} at x = {x}")
            }
            RootFinderError::MaxIterationsExceeded {
                iterations,
                last_estimate,
            } => {
                write!(
                    f,
                    "root finder did not converge after {iterations} iterations, last estimate: {last_estimate:.8}"
                )
            }
        }
    }
}

impl std::error::Error for RootFinderError {}

fn evaluate<F>(f: &F, x: f64) -> Result<f64, RootFinderError>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RootFinderError::NonFiniteValue { x, value })
    }
}

/// Finds a root of `f` inside `[lower, upper]`.
///
/// `df` is the derivative of `f`, or any estimate of it. A bad estimate only
/// costs iterations: rejected Newton steps fall back to bisection.
///
/// # Arguments
/// - `f`: Continuous function whose root is sought
/// - `df`: Derivative (or proxy) of `f`
/// - `lower`, `upper`: Bracket bounds, `f(lower)` and `f(upper)` of opposite sign
/// - `config`: Tolerance and iteration budget
///
/// # Returns
/// - `Ok(Root)` once `|f(x)| < tolerance` or the bracket is narrower than `tolerance`
/// - `Err(RootFinderError)` if the bracket holds no sign change, `f` is not
///   finite, or the iteration budget runs out
///
/// # Example
/// ```
/// use blackscholes_rs::math::{RootFinderConfig, find_root};
///
/// let root = find_root(|x| x * x - 2.0, |x| 2.0 * x, 0.0, 2.0, &RootFinderConfig::default())?;
/// assert!((root.value - 2f64.sqrt()).abs() < 1e-8);
/// # Ok::<(), blackscholes_rs::math::RootFinderError>(())
/// ```
pub fn find_root<F, D>(
    f: F,
    df: D,
    lower: f64,
    upper: f64,
    config: &RootFinderConfig,
) -> Result<Root, RootFinderError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(RootFinderError::InvalidBracket { lower, upper });
    }
    if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
        return Err(RootFinderError::InvalidConfig {
            message: format!("tolerance must be positive, got {}", config.tolerance),
        });
    }

    let mut lo = lower;
    let mut hi = upper;
    let mut f_lo = evaluate(&f, lo)?;
    let f_hi = evaluate(&f, hi)?;

    if f_lo == 0.0 {
        return Ok(Root {
            value: lo,
            residual: 0.0,
            iterations: 0,
        });
    }
    if f_hi == 0.0 {
        return Ok(Root {
            value: hi,
            residual: 0.0,
            iterations: 0,
        });
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(RootFinderError::NotBracketed {
            lower,
            upper,
            f_lower: f_lo,
            f_upper: f_hi,
        });
    }

    let mut x = 0.5 * (lo + hi);
    let mut fx = evaluate(&f, x)?;
    if fx.abs() < config.tolerance {
        return Ok(Root {
            value: x,
            residual: fx,
            iterations: 0,
        });
    }

    let mut last_step = hi - lo;

    for iteration in 1..=config.max_iterations {
        let dfx = df(x);
        let newton = x - fx / dfx;

        // Reject steps that leave the bracket or fail to halve the previous step.
        let accept = dfx.is_finite()
            && dfx != 0.0
            && newton > lo
            && newton < hi
            && (2.0 * fx).abs() <= (last_step * dfx).abs();

        if accept {
            last_step = (newton - x).abs();
            x = newton;
        } else {
            last_step = 0.5 * (hi - lo);
            x = 0.5 * (lo + hi);
        }

        fx = evaluate(&f, x)?;

        if fx.signum() == f_lo.signum() {
            lo = x;
            f_lo = fx;
        } else {
            hi = x;
        }

        trace!(
            "root finder iteration {}: x = {}, f(x) = {:e}, bracket = [{}, {}], newton = {}",
            iteration, x, fx, lo, hi, accept
        );

        if fx.abs() < config.tolerance || (hi - lo) < config.tolerance {
            return Ok(Root {
                value: x,
                residual: fx,
                iterations: iteration,
            });
        }
    }

    Err(RootFinderError::MaxIterationsExceeded {
        iterations: config.max_iterations,
        last_estimate: x,
    })
}
