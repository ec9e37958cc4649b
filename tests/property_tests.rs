//! Property-based tests using proptest.
//!
//! These verify invariant properties across random inputs rather than fixed
//! examples: put-call parity, call/put Greek symmetry, simulation bounds, and
//! smile ordering.

use proptest::prelude::*;
use vol_edge::prelude::*;

// --- Property 1: Put-call parity ---

proptest! {
    /// C - P = S - K*e^(-rT) for every valid snapshot, within 1e-6.
    #[test]
    fn put_call_parity_holds(
        spot in 50.0_f64..150.0,
        strike in 50.0_f64..150.0,
        time in 0.05_f64..2.0,
        rate in -0.02_f64..0.10,
        vol in 0.05_f64..0.80,
    ) {
        let call = MarketSnapshot::new(spot, strike, time, rate, vol, OptionType::Call).unwrap();
        let put = MarketSnapshot::new(spot, strike, time, rate, vol, OptionType::Put).unwrap();

        let c = bs_price(&call).unwrap();
        let p = bs_price(&put).unwrap();
        let forward_leg = spot - strike * (-rate * time).exp();

        prop_assert!(
            (c - p - forward_leg).abs() < 1e-6,
            "parity violated: C={c} P={p} S-K*df={forward_leg}"
        );
    }
}

// --- Property 2: Gamma and vega are option-type independent ---

proptest! {
    #[test]
    fn gamma_and_vega_identical_for_calls_and_puts(
        spot in 50.0_f64..150.0,
        strike in 50.0_f64..150.0,
        time in 0.05_f64..2.0,
        rate in -0.02_f64..0.10,
        vol in 0.05_f64..0.80,
    ) {
        let call = MarketSnapshot::new(spot, strike, time, rate, vol, OptionType::Call).unwrap();
        let put = MarketSnapshot::new(spot, strike, time, rate, vol, OptionType::Put).unwrap();

        let gc = bs_greeks(&call).unwrap();
        let gp = bs_greeks(&put).unwrap();

        prop_assert!((gc.gamma - gp.gamma).abs() < 1e-10);
        prop_assert!((gc.vega - gp.vega).abs() < 1e-10);
        prop_assert!(gc.gamma >= 0.0 && gc.vega >= 0.0);
    }
}

// --- Property 3: Delta stays inside its sign convention ---

proptest! {
    #[test]
    fn delta_respects_bounds(
        spot in 50.0_f64..150.0,
        strike in 50.0_f64..150.0,
        time in 0.05_f64..2.0,
        vol in 0.05_f64..0.80,
    ) {
        let call = MarketSnapshot::new(spot, strike, time, 0.05, vol, OptionType::Call).unwrap();
        let put = MarketSnapshot::new(spot, strike, time, 0.05, vol, OptionType::Put).unwrap();

        let dc = bs_greeks(&call).unwrap().delta;
        let dp = bs_greeks(&put).unwrap().delta;

        prop_assert!((0.0..=1.0).contains(&dc));
        prop_assert!((-1.0..=0.0).contains(&dp));
    }
}

// --- Property 4: Simulation statistics stay inside their contracts ---

proptest! {
    #[test]
    fn simulation_bounds_hold(
        path_count in 1_usize..4_000,
        seed in any::<u64>(),
        vol in 0.05_f64..0.80,
    ) {
        let snapshot =
            MarketSnapshot::new(100.0, 100.0, 0.5, 0.05, vol, OptionType::Call).unwrap();
        let sim = simulate(&snapshot, path_count, Some(seed)).unwrap();

        prop_assert_eq!(sim.paths, path_count);
        prop_assert!(sim.mean_payoff >= 0.0);
        prop_assert!((0.0..=1.0).contains(&sim.prob_itm));
        prop_assert!(sim.std_error >= 0.0);

        let (low, high) = sim.confidence_interval;
        prop_assert!(low <= sim.mean_payoff && sim.mean_payoff <= high);
    }
}

// --- Property 5: Seeded simulation is a pure function of its inputs ---

proptest! {
    #[test]
    fn seeded_simulation_reproduces(seed in any::<u64>()) {
        let snapshot =
            MarketSnapshot::new(100.0, 100.0, 0.5, 0.05, 0.20, OptionType::Call).unwrap();

        let a = simulate(&snapshot, 500, Some(seed)).unwrap();
        let b = simulate(&snapshot, 500, Some(seed)).unwrap();

        prop_assert_eq!(a, b);
    }
}

// --- Property 6: Historical volatility is non-negative ---

proptest! {
    #[test]
    fn historical_volatility_non_negative(
        closes in proptest::collection::vec(10.0_f64..500.0, 2..60),
    ) {
        let hv = historical_volatility(&closes, TRADING_DAYS_PER_YEAR).unwrap();
        prop_assert!(hv >= 0.0 && hv.is_finite());
    }
}

// --- Property 7: Smile output is strike-ordered ---

proptest! {
    #[test]
    fn smile_is_ordered_and_duplicate_free(
        strikes in proptest::collection::btree_set(10_u32..500, 1..30),
        vol in 0.05_f64..0.80,
    ) {
        let pairs: Vec<(f64, f64)> = strikes
            .iter()
            .map(|&k| (k as f64, vol))
            .collect();

        let curve = build_smile(&pairs).unwrap();
        prop_assert_eq!(curve.len(), pairs.len());

        let ordered = curve.strikes();
        prop_assert!(ordered.windows(2).all(|w| w[0] < w[1]));
    }
}
