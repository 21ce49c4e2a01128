//! Value types shared by the pricing engine and the implied volatility solver.

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

/// Market inputs of the Black-Scholes model.
///
/// `spot`, `strike`, `time_to_expiry` and `volatility` must be strictly
/// positive for the closed-form formulas to be meaningful. [`Self::new`] does
/// not check this: out-of-domain inputs flow through the formulas as `NaN` or
/// infinities. Use [`Self::try_new`] or [`Self::validate`] at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Underlying price (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to expiration in years (T).
    pub time_to_expiry: f64,
    /// Annualized volatility as a fraction, e.g. 0.2 for 20% (σ).
    pub volatility: f64,
    /// Annualized risk-free rate as a fraction, any sign (r).
    pub risk_free_rate: f64,
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() {
        return Err(PricingError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(PricingError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

impl OptionParameters {
    /// Creates parameters without validation.
    ///
    /// # Arguments
    /// - `spot`: Underlying price (S)
    /// - `strike`: Strike price (K)
    /// - `time_to_expiry`: Time to expiration in years (T)
    /// - `volatility`: Annualized volatility (σ)
    /// - `risk_free_rate`: Annualized risk-free rate (r)
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            volatility,
            risk_free_rate,
        }
    }

    /// Creates parameters and validates them.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidParameter`] if any input is non-finite or
    /// if `spot`, `strike`, `time_to_expiry` or `volatility` is not positive.
    pub fn try_new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Result<Self, PricingError> {
        let params = Self::new(spot, strike, time_to_expiry, volatility, risk_free_rate);
        params.validate()?;
        Ok(params)
    }

    /// Checks that the parameters lie inside the domain of the formulas.
    ///
    /// `time_to_expiry == 0` and `volatility == 0` are rejected as well: they
    /// are degenerate boundaries the closed form does not cover.
    pub fn validate(&self) -> Result<(), PricingError> {
        check_positive("spot", self.spot)?;
        check_positive("strike", self.strike)?;
        check_positive("time_to_expiry", self.time_to_expiry)?;
        check_positive("volatility", self.volatility)?;
        check_finite("risk_free_rate", self.risk_free_rate)
    }

    /// Returns a copy with a different volatility.
    #[must_use]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Discount factor `e^(-rT)`.
    #[must_use]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }

    /// Intrinsic value at expiry.
    ///
    /// For calls: max(0, S - K)
    /// For puts: max(0, K - S)
    #[must_use]
    pub fn intrinsic_value(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }

    /// Limit of the price as volatility goes to zero.
    ///
    /// For calls: max(0, S - K·e^(-rT))
    /// For puts: max(0, K·e^(-rT) - S)
    #[must_use]
    pub fn zero_volatility_price(&self, option_type: OptionType) -> f64 {
        let discounted_strike = self.strike * self.discount_factor();
        match option_type {
            OptionType::Call => (self.spot - discounted_strike).max(0.0),
            OptionType::Put => (discounted_strike - self.spot).max(0.0),
        }
    }
}

/// The standardized log-moneyness pair every formula is written in.
///
/// d+ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d- = d+ - σ√T
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntermediateTerms {
    /// d+ (often written d1).
    pub d_plus: f64,
    /// d- (often written d2).
    pub d_minus: f64,
}

/// Snapshot of prices and raw sensitivities for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionValues {
    /// Call price.
    pub call: f64,
    /// Put price.
    pub put: f64,
    /// ∂Call/∂S.
    pub call_delta: f64,
    /// ∂Put/∂S.
    pub put_delta: f64,
    /// ∂²Price/∂S², same for calls and puts.
    pub gamma: f64,
    /// ∂Call/∂T, per year.
    pub call_theta: f64,
    /// ∂Put/∂T, per year.
    pub put_theta: f64,
    /// ∂Price/∂σ, same for calls and puts.
    pub vega: f64,
    /// ∂²Price/∂σ², same for calls and puts.
    pub vomma: f64,
    /// ∂Call/∂r.
    pub call_rho: f64,
    /// ∂Put/∂r.
    pub put_rho: f64,
}

impl OptionValues {
    /// Price of the given option type.
    #[must_use]
    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, PricingError> {
        serde_json::to_string(self).map_err(|error| PricingError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(data: &str) -> Result<Self, PricingError> {
        serde_json::from_str(data).map_err(|error| PricingError::DeserializationError {
            message: error.to_string(),
        })
    }
}
