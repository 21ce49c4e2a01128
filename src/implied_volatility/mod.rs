//! Implied volatility from an observed option price.
//!
//! # Overview
//!
//! Implied volatility (IV) is the volatility that, fed into the Black-Scholes
//! formula, reproduces the observed price. There is no closed-form inverse, so
//! the solver searches the bracket `[0, 10]` (0% to 1000% a year) with a
//! Newton-Raphson iteration on `price(vol) - market_price`.
//!
//! Vega (∂price/∂σ) is the Newton derivative. Any step that would leave the
//! bracket or stall is replaced by a bisection step, so the search converges
//! whenever the bracket holds a solution.
//!
//! # Failures
//!
//! A price below the zero-volatility value `max(S - K·e^(-rT), 0)` (calls) or
//! above the price at the top of the bracket has no implied volatility and is
//! reported as [`IVError::RootNotBracketed`]. An exhausted iteration budget is
//! [`IVError::ConvergenceFailure`]. No failure is ever turned into a default
//! volatility.
//!
//! # Example
//!
//! ```
//! use blackscholes_rs::implied_volatility::{IVParams, SolverConfig, solve_iv};
//!
//! let params = IVParams::call(65000.0, 64000.0, 0.5, 0.05);
//! let result = solve_iv(&params, 12041.09, &SolverConfig::default())?;
//! assert!((result.iv - 0.6).abs() < 1e-4);
//! println!("IV: {:.2}%", result.iv_percent());
//! # Ok::<(), blackscholes_rs::implied_volatility::IVError>(())
//! ```

mod error;
mod solver;
mod types;

pub use error::IVError;
pub use solver::{
    SolverConfig, call_implied_volatility, implied_volatility, put_implied_volatility, solve_iv,
};
pub use types::{IVParams, IVResult};
