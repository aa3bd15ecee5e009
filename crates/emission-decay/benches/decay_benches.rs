//! Criterion benchmarks for emission-decay.
//!
//! Covers: series evaluation at both horizons, the full curve, and the
//! big-integer ratio conversion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use emission_core::constants::{
    DEFAULT_TAYLOR_TERMS, FOUR_HOURS_SECS, LAMBDA_DECAY, THREE_YEARS_SECS, TOTAL_REWARD,
};
use emission_core::traits::RewardCurve;
use emission_core::Horizon;
use emission_decay::{calibrate, exp_taylor, ratio_to_f64, TaylorCurve};
use num_bigint::BigUint;

fn bench_exp_taylor(c: &mut Criterion) {
    let short = BigUint::from(FOUR_HOURS_SECS as u128 * LAMBDA_DECAY);
    let long = BigUint::from(THREE_YEARS_SECS as u128 * LAMBDA_DECAY);

    c.bench_function("exp_taylor_4_hours", |b| {
        b.iter(|| exp_taylor(black_box(&short), DEFAULT_TAYLOR_TERMS))
    });
    c.bench_function("exp_taylor_3_years", |b| {
        b.iter(|| exp_taylor(black_box(&long), DEFAULT_TAYLOR_TERMS))
    });
}

fn bench_raw_reward(c: &mut Criterion) {
    let curve = TaylorCurve::new();

    c.bench_function("raw_reward_3_years", |b| {
        b.iter(|| curve.horizon_reward(black_box(Horizon::ThreeYears)))
    });
}

fn bench_ratio(c: &mut Criterion) {
    let num = BigUint::from(TOTAL_REWARD);
    let den = BigUint::from(849_254_154_104_002_177u64);

    c.bench_function("ratio_to_f64", |b| {
        b.iter(|| ratio_to_f64(black_box(&num), black_box(&den)))
    });
}

fn bench_calibrate(c: &mut Criterion) {
    let curve = TaylorCurve::new();

    c.bench_function("calibrate_all_horizons", |b| {
        b.iter(|| calibrate(black_box(&curve)))
    });
}

criterion_group!(
    benches,
    bench_exp_taylor,
    bench_raw_reward,
    bench_ratio,
    bench_calibrate,
);
criterion_main!(benches);
