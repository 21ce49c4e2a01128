//! Implied volatility solver.
//!
//! Finds the volatility at which the Black-Scholes price equals an observed
//! market price, by running the bracketed Newton-Raphson root finder on
//! `price(vol) - market_price` with vega as the derivative.

use tracing::{debug, warn};

use super::error::IVError;
use super::types::{IVParams, IVResult};
use crate::math::{RootFinderConfig, RootFinderError, find_root};
use crate::pricing::{BlackScholes, OptionType, check_finite};

/// Configuration for the implied volatility solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum iterations before giving up.
    pub max_iterations: u32,
    /// Convergence tolerance on the price difference (and bracket width).
    pub tolerance: f64,
    /// Lower end of the volatility bracket (default: 0.0).
    pub min_vol: f64,
    /// Upper end of the volatility bracket (default: 10.0 = 1000%).
    pub max_vol: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-5,
            min_vol: 0.0,
            max_vol: 10.0,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the volatility bracket.
    #[must_use]
    pub fn with_bounds(mut self, min_vol: f64, max_vol: f64) -> Self {
        self.min_vol = min_vol;
        self.max_vol = max_vol;
        self
    }

    fn root_finder_config(&self) -> RootFinderConfig {
        RootFinderConfig::new()
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
    }
}

/// Model price at `vol`, using the σ → 0 limit where the closed form divides
/// by zero.
fn model_price(params: &IVParams, vol: f64) -> f64 {
    if vol <= 0.0 {
        params.zero_volatility_price()
    } else {
        BlackScholes::price(params.option_type, &params.with_volatility(vol))
    }
}

fn map_root_error(error: RootFinderError, market_price: f64) -> IVError {
    match error {
        RootFinderError::NotBracketed {
            f_lower, f_upper, ..
        } => IVError::RootNotBracketed {
            market_price,
            min_price: f_lower + market_price,
            max_price: f_upper + market_price,
        },
        RootFinderError::MaxIterationsExceeded {
            iterations,
            last_estimate,
        } => IVError::ConvergenceFailure {
            iterations,
            last_iv: last_estimate,
        },
        RootFinderError::NonFiniteValue { x, value } => IVError::NumericalFailure {
            volatility: x,
            value,
        },
        RootFinderError::InvalidBracket { .. } | RootFinderError::InvalidConfig { .. } => {
            IVError::InvalidConfig {
                message: error.to_string(),
            }
        }
    }
}

/// Solves for implied volatility.
///
/// `config.tolerance` bounds the price residual `|model − market|`, not the
/// volatility error. Where vega is tiny (deep out of the money, short
/// expiry) a whole range of volatilities prices within tolerance, so the
/// returned `iv` can sit far from the volatility that produced the price.
/// Tighten the tolerance when such quotes matter.
///
/// # Arguments
/// - `params`: Option parameters (spot, strike, time, rate, type)
/// - `market_price`: Observed market price to match
/// - `config`: Bracket, tolerance and iteration budget
///
/// # Returns
/// - `Ok(IVResult)`: Converged IV with iteration count and final residual
/// - `Err(IVError)`: If inputs are invalid, no volatility in the bracket
///   reproduces the price, or the iteration budget runs out
///
/// # Example
/// ```
/// use blackscholes_rs::implied_volatility::{IVParams, SolverConfig, solve_iv};
///
/// let params = IVParams::call(100.0, 100.0, 0.25, 0.05);
/// let result = solve_iv(&params, 5.5, &SolverConfig::default())?;
/// assert!(result.iv > 0.2 && result.iv < 0.3);
/// # Ok::<(), blackscholes_rs::implied_volatility::IVError>(())
/// ```
pub fn solve_iv(
    params: &IVParams,
    market_price: f64,
    config: &SolverConfig,
) -> Result<IVResult, IVError> {
    params.validate()?;
    check_finite("market_price", market_price)?;
    if market_price < 0.0 {
        return Err(IVError::InvalidParams {
            message: format!("market price must be non-negative, got {market_price}"),
        });
    }

    let residual = |vol: f64| model_price(params, vol) - market_price;
    let vega = |vol: f64| BlackScholes::vega(&params.with_volatility(vol));

    let root = find_root(
        residual,
        vega,
        config.min_vol,
        config.max_vol,
        &config.root_finder_config(),
    )
    .map_err(|error| {
        let error = map_root_error(error, market_price);
        warn!(
            "implied volatility failed for {:?} at price {}: {}",
            params, market_price, error
        );
        error
    })?;

    debug!(
        "implied volatility {} for {:?} at price {} in {} iterations",
        root.value, params, market_price, root.iterations
    );

    Ok(IVResult {
        iv: root.value,
        price_used: market_price,
        residual: root.residual,
        iterations: root.iterations,
    })
}

/// Implied volatility of a European option with the default configuration:
/// bracket `[0, 10]`, tolerance `1e-5`, 100 iterations.
///
/// # Arguments
/// - `option_type`: Call or Put
/// - `spot`: Underlying price (S)
/// - `strike`: Strike price (K)
/// - `time_to_expiry`: Time to expiration in years (T)
/// - `risk_free_rate`: Annualized risk-free rate (r)
/// - `market_price`: Observed option price
pub fn implied_volatility(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    market_price: f64,
) -> Result<f64, IVError> {
    let params = IVParams::new(spot, strike, time_to_expiry, risk_free_rate, option_type);
    solve_iv(&params, market_price, &SolverConfig::default()).map(|result| result.iv)
}

/// Implied volatility of a European call. See [`implied_volatility`].
pub fn call_implied_volatility(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    market_price: f64,
) -> Result<f64, IVError> {
    implied_volatility(
        OptionType::Call,
        spot,
        strike,
        time_to_expiry,
        risk_free_rate,
        market_price,
    )
}

/// Implied volatility of a European put. See [`implied_volatility`].
pub fn put_implied_volatility(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    market_price: f64,
) -> Result<f64, IVError> {
    implied_volatility(
        OptionType::Put,
        spot,
        strike,
        time_to_expiry,
        risk_free_rate,
        market_price,
    )
}
