use blackscholes_rs::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_pricing(c: &mut Criterion) {
    let params = OptionParameters::new(100.0, 105.0, 0.5, 0.25, 0.03);

    let mut group = c.benchmark_group("pricing");
    group.bench_function("call_price", |b| {
        b.iter(|| BlackScholes::price(OptionType::Call, black_box(&params)))
    });
    group.bench_function("values", |b| {
        b.iter(|| BlackScholes::values(black_box(&params)))
    });
    group.finish();
}

fn bench_implied_volatility(c: &mut Criterion) {
    let config = SolverConfig::default();
    let atm = IVParams::call(100.0, 100.0, 0.25, 0.03);
    let atm_price = BlackScholes::price(OptionType::Call, &atm.with_volatility(0.25));
    let wing = IVParams::put(100.0, 70.0, 0.25, 0.03);
    let wing_price = BlackScholes::price(OptionType::Put, &wing.with_volatility(0.6));

    let mut group = c.benchmark_group("implied_volatility");
    group.bench_function("atm_call", |b| {
        b.iter(|| solve_iv(black_box(&atm), black_box(atm_price), &config))
    });
    group.bench_function("otm_put", |b| {
        b.iter(|| solve_iv(black_box(&wing), black_box(wing_price), &config))
    });
    group.finish();
}

criterion_group!(benches, bench_pricing, bench_implied_volatility);
criterion_main!(benches);
