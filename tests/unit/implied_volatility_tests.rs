use blackscholes_rs::prelude::*;

#[test]
fn test_concrete_scenario() {
    let p = OptionParameters::new(60.0, 60.0, 1.0, 0.4, 0.0134);
    let values = BlackScholes::values(&p);
    assert!((values.call - 9.8524).abs() < 1e-4);
    assert!((values.put - 9.0538).abs() < 1e-4);
    assert!((values.call_delta - 0.5923).abs() < 1e-4);
    assert!((values.gamma - 0.016175).abs() < 1e-6);
    assert!((values.vega - 23.2928).abs() < 1e-4);

    let iv = implied_volatility(OptionType::Call, 60.0, 60.0, 1.0, 0.0134, values.call).unwrap();
    assert!((iv - 0.4).abs() < 1e-5);
}

#[test]
fn test_out_of_the_money_scenario() {
    let p = OptionParameters::new(370.0, 500.0, 0.25, 0.3, 0.01);
    assert!((BlackScholes::call_price(&p) - 0.5597).abs() < 1e-4);
    assert!((BlackScholes::put_price(&p) - 129.31).abs() < 1e-2);
    assert!((BlackScholes::delta(OptionType::Call, &p) - 0.0277).abs() < 1e-4);
}

#[test]
fn test_narrow_bracket_and_tight_tolerance() {
    let params = IVParams::put(100.0, 95.0, 0.75, 0.03);
    let price = BlackScholes::price(OptionType::Put, &params.with_volatility(0.33));
    let config = SolverConfig::new()
        .with_bounds(0.2, 0.5)
        .with_tolerance(1e-10);

    let result = solve_iv(&params, price, &config).unwrap();
    assert!((result.iv - 0.33).abs() < 1e-8);
    assert!(result.residual.abs() < 1e-10);
    assert!((result.price_used - price).abs() < 1e-15);
}

#[test]
fn test_solution_outside_custom_bracket_fails() {
    let params = IVParams::call(100.0, 100.0, 1.0, 0.0);
    let price = BlackScholes::price(OptionType::Call, &params.with_volatility(0.8));
    let config = SolverConfig::new().with_bounds(0.1, 0.5);

    match solve_iv(&params, price, &config) {
        Err(IVError::RootNotBracketed {
            min_price,
            max_price,
            ..
        }) => {
            assert!(min_price < max_price);
            assert!(price > max_price);
        }
        other => panic!("expected RootNotBracketed, got {other:?}"),
    }
}

#[test]
fn test_theta_shaped_derivative_still_converges() {
    // Pairing the residual with ∂price/∂T instead of ∂price/∂σ gives the
    // root finder a wrong slope; the bisection fallback must still find sigma.
    let p = OptionParameters::new(4400.0, 2300.0, 0.25, 0.8, 0.02);
    let target = BlackScholes::call_price(&p);
    let config = RootFinderConfig::new().with_tolerance(1e-5);

    let with_theta = find_root(
        |vol| {
            if vol <= 0.0 {
                p.zero_volatility_price(OptionType::Call) - target
            } else {
                BlackScholes::call_price(&p.with_volatility(vol)) - target
            }
        },
        |vol| BlackScholes::theta(OptionType::Call, &p.with_volatility(vol)),
        0.0,
        10.0,
        &config,
    )
    .unwrap();
    assert!((with_theta.value - 0.8).abs() < 1e-4);

    let with_vega = solve_iv(
        &IVParams::call(4400.0, 2300.0, 0.25, 0.02),
        target,
        &SolverConfig::default(),
    )
    .unwrap();
    assert!((with_vega.iv - 0.8).abs() < 1e-4);
    assert!(with_vega.iterations <= with_theta.iterations);
}

#[test]
fn test_result_serializes() {
    let result = solve_iv(
        &IVParams::call(100.0, 100.0, 0.5, 0.02),
        8.0,
        &SolverConfig::default(),
    )
    .unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"iv\""));
    assert!(json.contains("\"iterations\""));
}
