//! Closed-form Black-Scholes pricing of European options.
//!
//! # Overview
//!
//! All formulas take an [`OptionParameters`] bundle and return a scalar:
//!
//! | Quantity | Call | Put |
//! |---|---|---|
//! | Price | `S·Φ(d+) − K·e^(−rT)·Φ(d−)` | `K·e^(−rT)·Φ(−d−) − S·Φ(−d+)` |
//! | Delta | `Φ(d+)` | `−Φ(−d+)` |
//! | Gamma | `φ(d+) / (S·σ·√T)` | same |
//! | Theta | `S·φ(d+)·σ/(2√T) + r·K·e^(−rT)·Φ(d−)` | `S·φ(d+)·σ/(2√T) − r·K·e^(−rT)·Φ(−d−)` |
//! | Vega | `S·φ(d+)·√T` | same |
//! | Vomma | `S·φ(d+)·√T·d+·d−/σ` | same |
//! | Rho | `K·T·e^(−rT)·Φ(d−)` | `−K·T·e^(−rT)·Φ(−d−)` |
//!
//! Theta is `∂Price/∂T` per year. Vega, Vomma and Rho are per unit change.
//! [`conventions`] converts to per-day and per-percentage-point figures.
//!
//! # Example
//!
//! ```
//! use blackscholes_rs::pricing::{BlackScholes, OptionParameters, OptionType};
//!
//! let params = OptionParameters::try_new(370.0, 500.0, 0.25, 0.3, 0.01)?;
//! let values = BlackScholes::values(&params);
//! assert!((values.call - 0.5597).abs() < 1e-4);
//! assert!((values.put - 129.31).abs() < 1e-2);
//! assert!((BlackScholes::delta(OptionType::Call, &params) - 0.0277).abs() < 1e-4);
//! # Ok::<(), blackscholes_rs::pricing::PricingError>(())
//! ```

mod black_scholes;
pub mod conventions;
mod error;
mod types;

pub use black_scholes::BlackScholes;
pub use error::PricingError;
pub use types::{IntermediateTerms, OptionParameters, OptionType, OptionValues};
pub(crate) use types::{check_finite, check_positive};
