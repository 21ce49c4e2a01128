//! Types for implied volatility calculation.

use serde::{Deserialize, Serialize};

use crate::pricing::{OptionParameters, OptionType, PricingError, check_finite, check_positive};

/// Parameters for IV calculation.
///
/// Everything the pricing formula needs except the volatility being solved
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IVParams {
    /// Underlying spot price.
    pub spot: f64,
    /// Option strike price.
    pub strike: f64,
    /// Time to expiration in years (e.g., 30 days = 30.0 / 365.0).
    pub time_to_expiry: f64,
    /// Risk-free interest rate (annualized, e.g., 0.05 for 5%).
    pub risk_free_rate: f64,
    /// Option type (Call or Put).
    pub option_type: OptionType,
}

impl IVParams {
    /// Creates new IV parameters.
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            option_type,
        }
    }

    /// Creates parameters for a call option.
    #[must_use]
    pub fn call(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Call,
        )
    }

    /// Creates parameters for a put option.
    #[must_use]
    pub fn put(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Put,
        )
    }

    /// Checks spot, strike and time to expiry are positive and the rate is
    /// finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        check_positive("spot", self.spot)?;
        check_positive("strike", self.strike)?;
        check_positive("time_to_expiry", self.time_to_expiry)?;
        check_finite("risk_free_rate", self.risk_free_rate)
    }

    /// Full pricing parameters at the given volatility.
    #[must_use]
    pub fn with_volatility(&self, volatility: f64) -> OptionParameters {
        OptionParameters::new(
            self.spot,
            self.strike,
            self.time_to_expiry,
            volatility,
            self.risk_free_rate,
        )
    }

    /// Calculates the intrinsic value of the option.
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        self.with_volatility(0.0).intrinsic_value(self.option_type)
    }

    /// Lowest price any volatility can produce: the σ → 0 limit.
    #[must_use]
    pub fn zero_volatility_price(&self) -> f64 {
        self.with_volatility(0.0)
            .zero_volatility_price(self.option_type)
    }
}

/// Result of IV calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IVResult {
    /// Calculated implied volatility (e.g., 0.25 = 25%).
    pub iv: f64,
    /// Market price the volatility was solved for.
    pub price_used: f64,
    /// Model price minus market price at `iv`. Convergence bounds this, not
    /// the error in `iv`.
    pub residual: f64,
    /// Number of solver iterations to converge.
    pub iterations: u32,
}

impl IVResult {
    /// Returns the IV as a percentage (e.g., 25.0 for 25%).
    #[must_use]
    pub fn iv_percent(&self) -> f64 {
        self.iv * 100.0
    }
}
