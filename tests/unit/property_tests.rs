use blackscholes_rs::prelude::*;

fn grid() -> Vec<OptionParameters> {
    let mut params = Vec::new();
    for spot in [50.0, 100.0, 150.0] {
        for strike in [80.0, 100.0, 120.0] {
            for time_to_expiry in [0.05, 0.25, 1.0, 3.0] {
                for volatility in [0.05, 0.2, 0.5, 1.0, 2.0] {
                    for risk_free_rate in [-0.01, 0.0, 0.05] {
                        params.push(OptionParameters::new(
                            spot,
                            strike,
                            time_to_expiry,
                            volatility,
                            risk_free_rate,
                        ));
                    }
                }
            }
        }
    }
    params
}

#[test]
fn test_put_call_parity() {
    for p in grid() {
        let call = BlackScholes::call_price(&p);
        let put = BlackScholes::put_price(&p);
        let forward = p.spot - p.strike * p.discount_factor();
        assert!(
            (call - put - forward).abs() < 1e-9 * p.spot.max(p.strike),
            "parity failed for {:?}",
            p
        );
    }
}

#[test]
fn test_delta_bounds_and_relation() {
    for p in grid() {
        let call_delta = BlackScholes::delta(OptionType::Call, &p);
        let put_delta = BlackScholes::delta(OptionType::Put, &p);
        assert!((0.0..=1.0).contains(&call_delta), "call delta {call_delta} for {p:?}");
        assert!((-1.0..=0.0).contains(&put_delta), "put delta {put_delta} for {p:?}");
        assert!((call_delta - put_delta - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_delta_strictly_inside_bounds_across_grid() {
    // Beyond |d+| of about 8, Φ rounds to exactly 0 or 1 in f64.
    let mut checked = 0;
    for p in grid() {
        if BlackScholes::d_plus_minus(&p).d_plus.abs() >= 8.0 {
            continue;
        }
        let call_delta = BlackScholes::delta(OptionType::Call, &p);
        let put_delta = BlackScholes::delta(OptionType::Put, &p);
        assert!(call_delta > 0.0 && call_delta < 1.0, "call delta {call_delta} for {p:?}");
        assert!(put_delta > -1.0 && put_delta < 0.0, "put delta {put_delta} for {p:?}");
        checked += 1;
    }
    assert!(checked > 400);
}

#[test]
fn test_delta_strictly_inside_bounds_near_the_money() {
    let p = OptionParameters::new(100.0, 100.0, 0.5, 0.3, 0.02);
    let call_delta = BlackScholes::delta(OptionType::Call, &p);
    let put_delta = BlackScholes::delta(OptionType::Put, &p);
    assert!(call_delta > 0.0 && call_delta < 1.0);
    assert!(put_delta > -1.0 && put_delta < 0.0);
}

#[test]
fn test_gamma_and_vega_non_negative() {
    for p in grid() {
        assert!(BlackScholes::gamma(&p) >= 0.0, "gamma for {p:?}");
        assert!(BlackScholes::vega(&p) >= 0.0, "vega for {p:?}");
    }
}

#[test]
fn test_theta_and_rho_parity() {
    // Differentiating put-call parity in T and r.
    for p in grid() {
        let theta_diff =
            BlackScholes::theta(OptionType::Call, &p) - BlackScholes::theta(OptionType::Put, &p);
        let expected_theta = p.risk_free_rate * p.strike * p.discount_factor();
        assert!((theta_diff - expected_theta).abs() < 1e-9 * p.strike);

        let rho_diff =
            BlackScholes::rho(OptionType::Call, &p) - BlackScholes::rho(OptionType::Put, &p);
        let expected_rho = p.strike * p.time_to_expiry * p.discount_factor();
        assert!((rho_diff - expected_rho).abs() < 1e-9 * p.strike * p.time_to_expiry);
    }
}

#[test]
fn test_price_bounds() {
    for p in grid() {
        let call = BlackScholes::call_price(&p);
        let put = BlackScholes::put_price(&p);
        let tolerance = 1e-9 * p.spot.max(p.strike);
        assert!(call >= p.zero_volatility_price(OptionType::Call) - tolerance);
        assert!(call <= p.spot + tolerance);
        assert!(put >= p.zero_volatility_price(OptionType::Put) - tolerance);
        assert!(put <= p.strike * p.discount_factor() + tolerance);
    }
}

#[test]
fn test_price_approaches_intrinsic_at_expiry() {
    for (spot, strike) in [(110.0, 100.0), (90.0, 100.0), (100.0, 80.0)] {
        let p = OptionParameters::new(spot, strike, 1e-8, 0.2, 0.05);
        let call = BlackScholes::call_price(&p);
        let put = BlackScholes::put_price(&p);
        assert!((call - p.intrinsic_value(OptionType::Call)).abs() < 1e-3);
        assert!((put - p.intrinsic_value(OptionType::Put)).abs() < 1e-3);
    }
}

#[test]
fn test_price_approaches_discounted_intrinsic_at_zero_volatility() {
    for (spot, strike) in [(100.0, 100.0), (90.0, 100.0), (120.0, 100.0)] {
        let p = OptionParameters::new(spot, strike, 1.0, 1e-6, 0.05);
        let call = BlackScholes::call_price(&p);
        let put = BlackScholes::put_price(&p);
        assert!((call - p.zero_volatility_price(OptionType::Call)).abs() < 1e-6);
        assert!((put - p.zero_volatility_price(OptionType::Put)).abs() < 1e-6);
    }
}

#[test]
fn test_implied_volatility_round_trip() {
    let config = SolverConfig::default();
    for strike in [80.0, 90.0, 100.0, 110.0, 125.0] {
        for time_to_expiry in [0.1, 0.25, 1.0, 2.0] {
            for volatility in [0.05, 0.1, 0.2, 0.4, 0.8, 1.5, 3.0] {
                for risk_free_rate in [0.0, 0.05] {
                    for option_type in [OptionType::Call, OptionType::Put] {
                        let p = OptionParameters::new(
                            100.0,
                            strike,
                            time_to_expiry,
                            volatility,
                            risk_free_rate,
                        );
                        let price = BlackScholes::price(option_type, &p);
                        let iv_params =
                            IVParams::new(100.0, strike, time_to_expiry, risk_free_rate, option_type);
                        let result = solve_iv(&iv_params, price, &config).unwrap();

                        // The solver's contract is on the price residual.
                        let repriced = BlackScholes::price(option_type, &p.with_volatility(result.iv));
                        assert!(
                            (repriced - price).abs() < config.tolerance,
                            "residual too large for {p:?} {option_type:?}"
                        );

                        // Where the price is sensitive to volatility, that pins sigma.
                        if BlackScholes::vega(&p) > 1.0 {
                            assert!(
                                (result.iv - volatility).abs() < 1e-4,
                                "iv {} != {} for {p:?} {option_type:?}",
                                result.iv,
                                volatility
                            );
                        }
                        assert!(result.iterations <= config.max_iterations);
                    }
                }
            }
        }
    }
}

#[test]
fn test_price_below_zero_volatility_value_fails() {
    let p = OptionParameters::new(110.0, 100.0, 1.0, 0.2, 0.05);
    let floor = p.zero_volatility_price(OptionType::Call);
    assert!(floor > 14.0);

    let result = call_implied_volatility(110.0, 100.0, 1.0, 0.05, floor - 2.0);
    let err = result.unwrap_err();
    assert!(err.is_convergence_failure());
    assert!(matches!(err, IVError::RootNotBracketed { .. }));
}

#[test]
fn test_put_price_above_discounted_strike_fails() {
    let result = put_implied_volatility(100.0, 100.0, 1.0, 0.05, 100.0);
    assert!(matches!(result, Err(IVError::RootNotBracketed { .. })));
}
