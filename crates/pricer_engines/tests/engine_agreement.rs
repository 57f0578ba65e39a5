//! Cross-engine agreement tests.
//!
//! The closed-form engine is the ground truth; the lattice and Monte Carlo
//! engines must reproduce it within their documented tolerances, and the
//! three must agree exactly on degenerate (expired) instruments.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use pricer_engines::analytic::BlackScholesEngine;
use pricer_engines::binomial::BinomialEngine;
use pricer_engines::mc::{MonteCarloConfig, MonteCarloEngine};
use pricer_instruments::{BarrierKind, Instrument, MarketState, OptionType, Payoff};
use proptest::prelude::*;

const BS_CALL_REFERENCE: f64 = 10.450583572185565;

fn reference_market() -> MarketState {
    MarketState::new(100.0, 0.05, 0.2).unwrap()
}

fn mc_engine(seed: u64) -> MonteCarloEngine {
    let config = MonteCarloConfig::builder()
        .n_paths(200_000)
        .n_steps(50)
        .seed(seed)
        .build()
        .unwrap();
    MonteCarloEngine::new(config)
}

#[test]
fn analytic_matches_textbook_reference() {
    let call = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
    let price = BlackScholesEngine::new()
        .price(&call, &reference_market())
        .unwrap();
    assert_relative_eq!(price, BS_CALL_REFERENCE, epsilon = 1e-4);
}

#[test]
fn binomial_reproduces_analytic_within_tolerance() {
    let call = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
    let market = reference_market();
    let analytic = BlackScholesEngine::new().price(&call, &market).unwrap();

    for steps in [500, 750, 1000] {
        let lattice = BinomialEngine::new(steps)
            .unwrap()
            .price(&call, &market)
            .unwrap();
        assert_abs_diff_eq!(lattice, analytic, epsilon = 0.05);
    }
}

#[test]
fn monte_carlo_reproduces_analytic_within_tolerance() {
    let call = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
    let market = reference_market();
    let analytic = BlackScholesEngine::new().price(&call, &market).unwrap();

    let result = mc_engine(42).price(&call, &market).unwrap();
    let error = (result.price - analytic).abs();

    // 200k paths: standard error ≈ 0.03, so 0.2 is a generous band
    assert!(
        error < 0.2,
        "MC price {} deviates from analytic {} by {} (std error {})",
        result.price,
        analytic,
        error,
        result.std_error
    );
    assert!(error < (4.0 * result.std_error).max(0.2));
}

#[test]
fn american_put_carries_early_exercise_premium() {
    let market = MarketState::new(100.0, 0.10, 0.2).unwrap();
    let engine = BinomialEngine::new(750).unwrap();

    let european = Instrument::european(Payoff::put(100.0), 1.0).unwrap();
    let american = Instrument::american(Payoff::put(100.0), 1.0).unwrap();

    let european_lattice = engine.price(&european, &market).unwrap();
    let american_lattice = engine.price(&american, &market).unwrap();
    let european_analytic = BlackScholesEngine::new().price(&european, &market).unwrap();

    // Lattice agrees with the closed form on the European leg
    assert_abs_diff_eq!(european_lattice, european_analytic, epsilon = 0.05);
    // and the American leg is strictly worth more
    assert!(american_lattice > european_lattice);
}

#[test]
fn up_and_out_barrier_is_cheaper_than_vanilla() {
    let market = reference_market();
    let vanilla = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
    let knockout = Instrument::european(
        Payoff::barrier(OptionType::Call, 100.0, 120.0, BarrierKind::UpAndOut),
        1.0,
    )
    .unwrap();

    // Same seed: the barrier option prices on the same paths
    let vanilla_price = mc_engine(42).price(&vanilla, &market).unwrap().price;
    let knockout_price = mc_engine(42).price(&knockout, &market).unwrap().price;

    assert!(knockout_price > 0.0);
    assert!(
        knockout_price < vanilla_price,
        "knock-out {} should be below vanilla {}",
        knockout_price,
        vanilla_price
    );
}

#[test]
fn knock_in_plus_knock_out_equals_vanilla() {
    // In-out parity holds pathwise, so it is exact on shared draws
    let market = reference_market();
    let vanilla = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
    let knock_out = Instrument::european(
        Payoff::barrier(OptionType::Call, 100.0, 120.0, BarrierKind::UpAndOut),
        1.0,
    )
    .unwrap();
    let knock_in = Instrument::european(
        Payoff::barrier(OptionType::Call, 100.0, 120.0, BarrierKind::UpAndIn),
        1.0,
    )
    .unwrap();

    let v = mc_engine(9).price(&vanilla, &market).unwrap().price;
    let out = mc_engine(9).price(&knock_out, &market).unwrap().price;
    let inn = mc_engine(9).price(&knock_in, &market).unwrap().price;

    assert_abs_diff_eq!(out + inn, v, epsilon = 1e-9);
}

#[test]
fn asian_call_is_cheaper_than_vanilla() {
    let market = reference_market();
    let vanilla = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
    let asian = Instrument::european(Payoff::asian(OptionType::Call, 100.0), 1.0).unwrap();

    let vanilla_price = mc_engine(42).price(&vanilla, &market).unwrap().price;
    let asian_price = mc_engine(42).price(&asian, &market).unwrap().price;

    assert!(asian_price > 0.0);
    assert!(
        asian_price < vanilla_price,
        "asian {} should be below vanilla {}",
        asian_price,
        vanilla_price
    );
}

#[test]
fn expired_instruments_agree_exactly() {
    let market = MarketState::new(110.0, 0.05, 0.2).unwrap();
    let expired_call = Instrument::european(Payoff::call(100.0), 0.0).unwrap();

    let analytic = BlackScholesEngine::new()
        .price(&expired_call, &market)
        .unwrap();
    let lattice = BinomialEngine::new(500)
        .unwrap()
        .price(&expired_call, &market)
        .unwrap();
    let simulated = mc_engine(42).price(&expired_call, &market).unwrap();

    assert_eq!(analytic, 10.0);
    assert_eq!(lattice, 10.0);
    assert_eq!(simulated.price, 10.0);
    assert_eq!(simulated.std_error, 0.0);
}

#[test]
fn put_call_parity_at_reference_point() {
    let market = reference_market();
    let engine = BlackScholesEngine::new();

    let call = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
    let put = Instrument::european(Payoff::put(100.0), 1.0).unwrap();

    let c = engine.price(&call, &market).unwrap();
    let p = engine.price(&put, &market).unwrap();
    let forward = 100.0 - 100.0 * (-0.05_f64).exp();

    assert_abs_diff_eq!(c - p, forward, epsilon = 1e-6);
}

#[test]
fn monte_carlo_is_reproducible_across_instances() {
    let market = reference_market();
    let asian = Instrument::european(Payoff::asian(OptionType::Call, 100.0), 1.0).unwrap();

    let a = mc_engine(1234).price(&asian, &market).unwrap();
    let b = mc_engine(1234).price(&asian, &market).unwrap();
    assert_eq!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_binomial_tracks_analytic(
        spot in 80.0_f64..120.0,
        strike in 80.0_f64..120.0,
        volatility in 0.10_f64..0.40,
        rate in 0.0_f64..0.08,
        expiry in 0.25_f64..2.0,
    ) {
        let market = MarketState::new(spot, rate, volatility).unwrap();
        let call = Instrument::european(Payoff::call(strike), expiry).unwrap();

        let analytic = BlackScholesEngine::new().price(&call, &market).unwrap();
        let lattice = BinomialEngine::new(500).unwrap().price(&call, &market).unwrap();

        prop_assert!((lattice - analytic).abs() < 0.2);
    }
}
