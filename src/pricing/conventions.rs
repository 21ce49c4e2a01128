//! Trader-unit views of the raw sensitivities.
//!
//! The engine returns true derivatives. Desks usually quote theta as decay per
//! calendar day and vega, vomma and rho per percentage point. These helpers
//! only rescale; they never recompute a formula.

use super::types::OptionValues;

/// Calendar days per year used to express theta per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Scale between a unit change and a one percentage-point change.
pub const PERCENT: f64 = 100.0;

/// Raw theta (∂price/∂T per year) expressed per calendar day, same sign.
#[must_use]
#[inline]
pub fn theta_per_day(raw_theta: f64) -> f64 {
    raw_theta / DAYS_PER_YEAR
}

/// Price change over one calendar day of passing time.
///
/// Time to expiry shrinks as time passes, so this is the negated per-day
/// theta: negative for a long option that loses value.
#[must_use]
#[inline]
pub fn decay_per_day(raw_theta: f64) -> f64 {
    -theta_per_day(raw_theta)
}

/// Raw vega, vomma or rho expressed per percentage point.
#[must_use]
#[inline]
pub fn per_percent_point(raw: f64) -> f64 {
    raw / PERCENT
}

impl OptionValues {
    /// Returns the snapshot in trader units.
    ///
    /// Prices, deltas and gamma are unchanged. Thetas become decay per day
    /// ([`decay_per_day`]); vega, vomma and rho become per percentage point.
    #[must_use]
    pub fn to_trader_units(&self) -> OptionValues {
        OptionValues {
            call_theta: decay_per_day(self.call_theta),
            put_theta: decay_per_day(self.put_theta),
            vega: per_percent_point(self.vega),
            vomma: per_percent_point(self.vomma),
            call_rho: per_percent_point(self.call_rho),
            put_rho: per_percent_point(self.put_rho),
            ..*self
        }
    }
}
