//! # blackscholes-rs
//!
//! Closed-form prices and sensitivities ("Greeks") of European options under
//! the Black-Scholes model, and implied volatility recovered from an observed
//! market price.
//!
//! The crate is a pure, stateless computation library. Every function takes
//! scalar market inputs and returns scalars; there is no I/O, no shared
//! mutable state, and every call may run concurrently with any other.
//!
//! ## Layout
//!
//! - [`math`]: standard normal density/CDF and a bracketed Newton-Raphson
//!   root finder with bisection fallback.
//! - [`pricing`]: the Black-Scholes engine. All formulas share one pair of
//!   intermediate terms `d+`/`d-`, and all sensitivities are returned as raw
//!   mathematical derivatives. Trader-unit scaling lives in
//!   [`pricing::conventions`].
//! - [`implied_volatility`]: inverts the pricing formula over the bracket
//!   `[0, 10]` (0% to 1000% annual volatility).
//!
//! ## Example
//!
//! ```
//! use blackscholes_rs::prelude::*;
//!
//! let params = OptionParameters::new(60.0, 60.0, 1.0, 0.4, 0.0134);
//! let call = BlackScholes::price(OptionType::Call, &params);
//! assert!((call - 9.8524).abs() < 1e-3);
//!
//! let iv = call_implied_volatility(60.0, 60.0, 1.0, 0.0134, call).unwrap();
//! assert!((iv - 0.4).abs() < 1e-4);
//! ```
//!
//! ## Scale conventions
//!
//! Theta is `∂Price/∂T` per year, positive as time to expiry grows. Vega,
//! Vomma and Rho are per unit (not per percentage point). Divide Theta by 365
//! and Vega/Vomma/Rho by 100 for the usual trader quotes; the helpers in
//! [`pricing::conventions`] do exactly that.

pub mod implied_volatility;
pub mod math;
pub mod pricing;

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::implied_volatility::{
        IVError, IVParams, IVResult, SolverConfig, call_implied_volatility, implied_volatility,
        put_implied_volatility, solve_iv,
    };
    pub use crate::math::{Root, RootFinderConfig, RootFinderError, StandardNormal, find_root};
    pub use crate::pricing::{
        BlackScholes, IntermediateTerms, OptionParameters, OptionType, OptionValues,
        PricingError,
    };
}
