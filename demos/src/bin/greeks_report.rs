//! Prints a full Greeks report for a few option parameter sets.
//!
//! This example shows how to:
//! 1. Validate inputs at the boundary with `OptionParameters::try_new`
//! 2. Compute the raw snapshot and its trader-unit view
//! 3. Recover the volatility back from the computed prices

use blackscholes_rs::prelude::*;
use serde::Serialize;
use tracing::{error, info};

#[derive(Serialize)]
struct Report {
    params: OptionParameters,
    raw: OptionValues,
    trader_units: OptionValues,
    call_iv: Option<IVResult>,
    put_iv: Option<IVResult>,
}

fn solve(params: &OptionParameters, option_type: OptionType, price: f64) -> Option<IVResult> {
    let iv_params = IVParams::new(
        params.spot,
        params.strike,
        params.time_to_expiry,
        params.risk_free_rate,
        option_type,
    );
    match solve_iv(&iv_params, price, &SolverConfig::default()) {
        Ok(result) => Some(result),
        Err(e) => {
            error!("{:?} implied volatility failed: {}", option_type, e);
            None
        }
    }
}

fn report(spot: f64, strike: f64, time_to_expiry: f64, volatility: f64, risk_free_rate: f64) {
    let params =
        match OptionParameters::try_new(spot, strike, time_to_expiry, volatility, risk_free_rate) {
            Ok(params) => params,
            Err(e) => {
                error!("Skipping parameter set: {}", e);
                return;
            }
        };

    let raw = BlackScholes::values(&params);
    let report = Report {
        params,
        raw,
        trader_units: raw.to_trader_units(),
        call_iv: solve(&params, OptionType::Call, raw.call),
        put_iv: solve(&params, OptionType::Put, raw.put),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Failed to serialize report: {}", e),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    info!("Black-Scholes Greeks report");
    report(60.0, 60.0, 1.0, 0.4, 0.0134);
    report(370.0, 500.0, 0.25, 0.3, 0.01);
    report(65000.0, 64000.0, 0.5, 0.6, 0.05);

    // Rejected at the boundary: volatility must be positive.
    report(100.0, 100.0, 1.0, 0.0, 0.05);

    // No volatility reproduces a call price below S - K·e^(-rT).
    match call_implied_volatility(110.0, 100.0, 1.0, 0.05, 12.0) {
        Ok(iv) => info!("Unexpected implied volatility: {}", iv),
        Err(e) => info!("Below the zero-volatility price: {}", e),
    }
}
