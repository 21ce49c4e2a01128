//! Black-Scholes pricing model and Greeks calculation.
//!
//! Every formula is written in terms of one [`IntermediateTerms`] pair, the
//! standard normal φ/Φ and the raw inputs. Nothing re-derives its own
//! logarithms, so price and sensitivities stay mutually consistent.
//!
//! The formulas are total: they never panic and never validate. Out-of-domain
//! inputs (σ = 0, T = 0, S/K ≤ 0) produce `NaN` or infinities.

use tracing::trace;

use super::types::{IntermediateTerms, OptionParameters, OptionType, OptionValues};
use crate::math::StandardNormal;

#[inline]
fn phi(x: f64) -> f64 {
    StandardNormal::density(x)
}

#[inline]
fn big_phi(x: f64) -> f64 {
    StandardNormal::cdf(x)
}

/// Black-Scholes pricing model implementation.
///
/// Provides methods for calculating European option prices and Greeks.
/// Theta, Vega, Vomma and Rho are raw derivatives; see
/// [`crate::pricing::conventions`] for trader units.
pub struct BlackScholes;

impl BlackScholes {
    /// Calculates d+ and d-.
    ///
    /// d+ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    /// d- = d+ - σ√T
    #[must_use]
    pub fn d_plus_minus(params: &OptionParameters) -> IntermediateTerms {
        let vol_sqrt_time = params.volatility * params.time_to_expiry.sqrt();
        let d_plus = ((params.spot / params.strike).ln()
            + (params.risk_free_rate + 0.5 * params.volatility * params.volatility)
                * params.time_to_expiry)
            / vol_sqrt_time;
        IntermediateTerms {
            d_plus,
            d_minus: d_plus - vol_sqrt_time,
        }
    }

    /// Calculates the theoretical option price.
    ///
    /// For calls: C = S·Φ(d+) - K·e^(-rT)·Φ(d-)
    /// For puts:  P = K·e^(-rT)·Φ(-d-) - S·Φ(-d+)
    #[must_use]
    pub fn price(option_type: OptionType, params: &OptionParameters) -> f64 {
        let terms = Self::d_plus_minus(params);
        Self::price_from_terms(option_type, params, &terms)
    }

    /// Price of a call. Shorthand for `price(OptionType::Call, params)`.
    #[must_use]
    pub fn call_price(params: &OptionParameters) -> f64 {
        Self::price(OptionType::Call, params)
    }

    /// Price of a put. Shorthand for `price(OptionType::Put, params)`.
    #[must_use]
    pub fn put_price(params: &OptionParameters) -> f64 {
        Self::price(OptionType::Put, params)
    }

    /// Calculates delta (∂price/∂S).
    ///
    /// For calls: Δ = Φ(d+)
    /// For puts:  Δ = -Φ(-d+)
    #[must_use]
    pub fn delta(option_type: OptionType, params: &OptionParameters) -> f64 {
        let terms = Self::d_plus_minus(params);
        Self::delta_from_terms(option_type, &terms)
    }

    /// Calculates gamma (∂²price/∂S²), the convexity of delta.
    ///
    /// Γ = φ(d+) / (S·σ·√T)
    ///
    /// Same for calls and puts.
    #[must_use]
    pub fn gamma(params: &OptionParameters) -> f64 {
        let terms = Self::d_plus_minus(params);
        Self::gamma_from_terms(params, &terms)
    }

    /// Calculates theta as ∂price/∂T, per year.
    ///
    /// For calls: Θ = S·φ(d+)·σ/(2√T) + r·K·e^(-rT)·Φ(d-)
    /// For puts:  Θ = S·φ(d+)·σ/(2√T) - r·K·e^(-rT)·Φ(-d-)
    ///
    /// The value grows with time to expiry, so it is usually positive for a
    /// long position. Negate it for decay as time passes and divide by 365
    /// for a per-day figure.
    #[must_use]
    pub fn theta(option_type: OptionType, params: &OptionParameters) -> f64 {
        let terms = Self::d_plus_minus(params);
        Self::theta_from_terms(option_type, params, &terms)
    }

    /// Calculates vega (∂price/∂σ).
    ///
    /// Vega = S·φ(d+)·√T
    ///
    /// Same for calls and puts. Divide by 100 for the change per volatility
    /// point.
    #[must_use]
    pub fn vega(params: &OptionParameters) -> f64 {
        let terms = Self::d_plus_minus(params);
        Self::vega_from_terms(params, &terms)
    }

    /// Calculates vomma, also known as volga (∂²price/∂σ²).
    ///
    /// Vomma = S·φ(d+)·√T·d+·d-/σ
    #[must_use]
    pub fn vomma(params: &OptionParameters) -> f64 {
        let terms = Self::d_plus_minus(params);
        Self::vomma_from_terms(params, &terms)
    }

    /// Calculates rho (∂price/∂r).
    ///
    /// For calls: ρ = K·T·e^(-rT)·Φ(d-)
    /// For puts:  ρ = -K·T·e^(-rT)·Φ(-d-)
    #[must_use]
    pub fn rho(option_type: OptionType, params: &OptionParameters) -> f64 {
        let terms = Self::d_plus_minus(params);
        Self::rho_from_terms(option_type, params, &terms)
    }

    /// Computes both prices and every sensitivity from a single d+/d- pair.
    #[must_use]
    pub fn values(params: &OptionParameters) -> OptionValues {
        let terms = Self::d_plus_minus(params);
        trace!(
            "values: d_plus = {}, d_minus = {} for {:?}",
            terms.d_plus, terms.d_minus, params
        );

        OptionValues {
            call: Self::price_from_terms(OptionType::Call, params, &terms),
            put: Self::price_from_terms(OptionType::Put, params, &terms),
            call_delta: Self::delta_from_terms(OptionType::Call, &terms),
            put_delta: Self::delta_from_terms(OptionType::Put, &terms),
            gamma: Self::gamma_from_terms(params, &terms),
            call_theta: Self::theta_from_terms(OptionType::Call, params, &terms),
            put_theta: Self::theta_from_terms(OptionType::Put, params, &terms),
            vega: Self::vega_from_terms(params, &terms),
            vomma: Self::vomma_from_terms(params, &terms),
            call_rho: Self::rho_from_terms(OptionType::Call, params, &terms),
            put_rho: Self::rho_from_terms(OptionType::Put, params, &terms),
        }
    }

    fn price_from_terms(
        option_type: OptionType,
        params: &OptionParameters,
        terms: &IntermediateTerms,
    ) -> f64 {
        let discounted_strike = params.strike * params.discount_factor();
        match option_type {
            OptionType::Call => {
                params.spot * big_phi(terms.d_plus) - discounted_strike * big_phi(terms.d_minus)
            }
            OptionType::Put => {
                discounted_strike * big_phi(-terms.d_minus) - params.spot * big_phi(-terms.d_plus)
            }
        }
    }

    fn delta_from_terms(option_type: OptionType, terms: &IntermediateTerms) -> f64 {
        match option_type {
            OptionType::Call => big_phi(terms.d_plus),
            OptionType::Put => -big_phi(-terms.d_plus),
        }
    }

    fn gamma_from_terms(params: &OptionParameters, terms: &IntermediateTerms) -> f64 {
        phi(terms.d_plus) / (params.spot * params.volatility * params.time_to_expiry.sqrt())
    }

    fn theta_from_terms(
        option_type: OptionType,
        params: &OptionParameters,
        terms: &IntermediateTerms,
    ) -> f64 {
        let diffusion = params.spot * phi(terms.d_plus) * params.volatility
            / (2.0 * params.time_to_expiry.sqrt());
        let carry = params.risk_free_rate * params.strike * params.discount_factor();

        match option_type {
            OptionType::Call => diffusion + carry * big_phi(terms.d_minus),
            OptionType::Put => diffusion - carry * big_phi(-terms.d_minus),
        }
    }

    fn vega_from_terms(params: &OptionParameters, terms: &IntermediateTerms) -> f64 {
        params.spot * phi(terms.d_plus) * params.time_to_expiry.sqrt()
    }

    fn vomma_from_terms(params: &OptionParameters, terms: &IntermediateTerms) -> f64 {
        Self::vega_from_terms(params, terms) * terms.d_plus * terms.d_minus / params.volatility
    }

    fn rho_from_terms(
        option_type: OptionType,
        params: &OptionParameters,
        terms: &IntermediateTerms,
    ) -> f64 {
        let discounted = params.strike * params.time_to_expiry * params.discount_factor();
        match option_type {
            OptionType::Call => discounted * big_phi(terms.d_minus),
            OptionType::Put => -discounted * big_phi(-terms.d_minus),
        }
    }
}
