//! Monte Carlo simulation under geometric Brownian motion
//!
//! Two entry points:
//! - `simulate`: single-step terminal sampling for European payoff statistics.
//!   Only the terminal distribution matters for the payoff, so no path walk.
//! - `simulate_paths`: full GBM log-walk producing a path matrix for the
//!   rendering collaborator (path fans, terminal histograms).
//!
//! Sampling is a batched array computation over independent draws from one
//! seeded ChaCha8 stream, so a fixed seed reproduces results bit for bit.

use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::core::{MarketSnapshot, VolEdgeError, VolEdgeResult};

/// Path count below which the standard error is considered too wide
/// (~1% of an at-the-money payoff needs roughly this many paths).
/// A design target, not a hard limit.
pub const RECOMMENDED_MIN_PATHS: usize = 25_000;

/// z-value for the 95% confidence interval
const CI_Z: f64 = 1.96;

/// Aggregate statistics from one terminal-sampling run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Number of simulated paths
    pub paths: usize,
    /// Discounted average payoff
    pub mean_payoff: f64,
    /// Fraction of paths expiring in the money
    pub prob_itm: f64,
    /// 95% confidence interval around the mean payoff
    pub confidence_interval: (f64, f64),
    /// Standard error of the discounted payoff mean
    pub std_error: f64,
    /// Set when paths < RECOMMENDED_MIN_PATHS
    pub low_confidence: bool,
}

/// Simulated GBM trajectories for charting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathGrid {
    /// Time grid, 0..=T in `steps` increments
    pub times: Vec<f64>,
    /// One row per path, one column per time point
    pub paths: Array2<f64>,
}

fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Terminal-sampling Monte Carlo for a European option
///
/// S_T = S·exp((r − σ²/2)T + σ√T·Z) per independent draw Z. The payoff mean,
/// ITM probability, and a 95% interval come from the discounted payoff sample;
/// the standard error uses the population standard deviation, which keeps a
/// single-path run well-defined.
pub fn simulate(
    snapshot: &MarketSnapshot,
    path_count: usize,
    seed: Option<u64>,
) -> VolEdgeResult<SimulationResult> {
    if path_count == 0 {
        return Err(VolEdgeError::invalid_input("path_count must be at least 1"));
    }

    let low_confidence = path_count < RECOMMENDED_MIN_PATHS;
    if low_confidence {
        tracing::warn!(
            path_count,
            recommended = RECOMMENDED_MIN_PATHS,
            "path count below recommendation, standard error may exceed tolerance"
        );
    }

    let spot = snapshot.spot();
    let strike = snapshot.strike();
    let vol = snapshot.volatility();
    let time = snapshot.time_to_expiry();
    let option_type = snapshot.option_type();
    let df = snapshot.discount_factor();

    let drift = (snapshot.rate() - 0.5 * vol * vol) * time;
    let diffusion = vol * time.sqrt();

    let mut rng = rng_from_seed(seed);
    let draws: Array1<f64> =
        Array1::from_iter((0..path_count).map(|_| StandardNormal.sample(&mut rng)));

    let payoffs = draws.mapv(|z: f64| {
        let terminal = spot * (drift + diffusion * z).exp();
        df * option_type.intrinsic(terminal, strike)
    });

    let n = path_count as f64;
    let mean_payoff = payoffs.sum() / n;
    let variance = payoffs.fold(0.0, |acc, &p| acc + (p - mean_payoff) * (p - mean_payoff)) / n;
    let std_error = variance.sqrt() / n.sqrt();
    let itm = payoffs.iter().filter(|&&p| p > 0.0).count();

    if !mean_payoff.is_finite() || !std_error.is_finite() {
        return Err(VolEdgeError::numerical(format!(
            "non-finite payoff statistics for spot={spot}, vol={vol}, t={time}"
        )));
    }

    Ok(SimulationResult {
        paths: path_count,
        mean_payoff,
        prob_itm: itm as f64 / n,
        confidence_interval: (
            mean_payoff - CI_Z * std_error,
            mean_payoff + CI_Z * std_error,
        ),
        std_error,
        low_confidence,
    })
}

/// Full GBM path walk
///
/// Each row accumulates per-step log returns; column 0 is the spot. The same
/// seed reproduces the same grid.
pub fn simulate_paths(
    snapshot: &MarketSnapshot,
    n_paths: usize,
    steps: usize,
    seed: Option<u64>,
) -> VolEdgeResult<PathGrid> {
    if n_paths == 0 || steps == 0 {
        return Err(VolEdgeError::invalid_input(
            "n_paths and steps must be at least 1",
        ));
    }

    let spot = snapshot.spot();
    let vol = snapshot.volatility();
    let time = snapshot.time_to_expiry();

    let dt = time / steps as f64;
    let sqrt_dt = dt.sqrt();
    let drift = (snapshot.rate() - 0.5 * vol * vol) * dt;

    let times: Vec<f64> = (0..=steps).map(|j| j as f64 * dt).collect();
    let mut rng = rng_from_seed(seed);
    let mut paths = Array2::zeros((n_paths, steps + 1));

    for i in 0..n_paths {
        paths[[i, 0]] = spot;
        let mut log_s = 0.0;
        for j in 1..=steps {
            let z: f64 = StandardNormal.sample(&mut rng);
            log_s += drift + vol * sqrt_dt * z;
            paths[[i, j]] = spot * log_s.exp();
        }
    }

    Ok(PathGrid { times, paths })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionType;

    fn atm_call() -> MarketSnapshot {
        MarketSnapshot::new(100.0, 100.0, 0.5, 0.05, 0.20, OptionType::Call).unwrap()
    }

    #[test]
    fn test_seeded_runs_are_bit_identical() {
        let a = simulate(&atm_call(), 10_000, Some(42)).unwrap();
        let b = simulate(&atm_call(), 10_000, Some(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = simulate(&atm_call(), 10_000, Some(42)).unwrap();
        let b = simulate(&atm_call(), 10_000, Some(43)).unwrap();

        assert_ne!(a.mean_payoff, b.mean_payoff);
    }

    #[test]
    fn test_result_invariants() {
        let result = simulate(&atm_call(), 5_000, Some(7)).unwrap();

        assert_eq!(result.paths, 5_000);
        assert!(result.mean_payoff >= 0.0);
        assert!(result.prob_itm >= 0.0 && result.prob_itm <= 1.0);
        assert!(result.std_error >= 0.0);

        let (low, high) = result.confidence_interval;
        assert!(low <= result.mean_payoff && result.mean_payoff <= high);
    }

    #[test]
    fn test_low_confidence_flag() {
        assert!(simulate(&atm_call(), 1_000, Some(1)).unwrap().low_confidence);
        assert!(!simulate(&atm_call(), 25_000, Some(1)).unwrap().low_confidence);
    }

    #[test]
    fn test_single_path_is_defined() {
        let result = simulate(&atm_call(), 1, Some(3)).unwrap();

        assert_eq!(result.paths, 1);
        assert_eq!(result.std_error, 0.0);
        let (low, high) = result.confidence_interval;
        assert_eq!(low, result.mean_payoff);
        assert_eq!(high, result.mean_payoff);
    }

    #[test]
    fn test_zero_paths_rejected() {
        assert!(simulate(&atm_call(), 0, None).is_err());
    }

    #[test]
    fn test_path_grid_shape() {
        let grid = simulate_paths(&atm_call(), 10, 50, Some(42)).unwrap();

        assert_eq!(grid.times.len(), 51);
        assert_eq!(grid.paths.dim(), (10, 51));
        assert_eq!(grid.times[0], 0.0);
        assert!((grid.times[50] - 0.5).abs() < 1e-12);

        // All paths start at spot and stay positive
        for i in 0..10 {
            assert_eq!(grid.paths[[i, 0]], 100.0);
            for j in 0..=50 {
                assert!(grid.paths[[i, j]] > 0.0);
            }
        }
    }

    #[test]
    fn test_path_grid_seeded_reproducibility() {
        let a = simulate_paths(&atm_call(), 5, 20, Some(9)).unwrap();
        let b = simulate_paths(&atm_call(), 5, 20, Some(9)).unwrap();

        assert_eq!(a.paths, b.paths);
    }

    #[test]
    fn test_path_grid_rejects_zero_dims() {
        assert!(simulate_paths(&atm_call(), 0, 50, None).is_err());
        assert!(simulate_paths(&atm_call(), 10, 0, None).is_err());
    }
}
