//! Historical volatility estimation
//!
//! Realized volatility from log returns of a close series, annualized by the
//! sampling frequency. Implied volatility is never computed here - it arrives
//! as an external scalar from the quote feed, or from the solver in
//! `black_scholes`.

use crate::core::{VolEdgeError, VolEdgeResult};

/// Default annualization factor for daily closes
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Log returns ln(P_i / P_{i-1}) of a close series
pub fn log_returns(closes: &[f64]) -> VolEdgeResult<Vec<f64>> {
    if closes.len() < 2 {
        return Err(VolEdgeError::insufficient_data(format!(
            "need at least 2 prices for returns, got {}",
            closes.len()
        )));
    }

    for &p in closes {
        if !p.is_finite() || p <= 0.0 {
            return Err(VolEdgeError::invalid_input(format!(
                "prices must be positive and finite, got {p}"
            )));
        }
    }

    Ok(closes.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Annualized historical volatility over a whole close series
///
/// Population standard deviation of the log returns scaled by
/// sqrt(periods_per_year); a constant series returns exactly 0.
pub fn historical_volatility(closes: &[f64], periods_per_year: u32) -> VolEdgeResult<f64> {
    if periods_per_year == 0 {
        return Err(VolEdgeError::invalid_input("periods_per_year must be positive"));
    }

    let returns = log_returns(closes)?;
    Ok(population_std(&returns) * (periods_per_year as f64).sqrt())
}

/// Rolling annualized historical volatility
///
/// Each output point is the volatility of the trailing `window` returns, so
/// the series has `closes.len() - window` entries.
pub fn rolling_volatility(
    closes: &[f64],
    window: usize,
    periods_per_year: u32,
) -> VolEdgeResult<Vec<f64>> {
    if window < 2 {
        return Err(VolEdgeError::invalid_input(format!(
            "rolling window must be at least 2 returns, got {window}"
        )));
    }
    if periods_per_year == 0 {
        return Err(VolEdgeError::invalid_input("periods_per_year must be positive"));
    }

    let returns = log_returns(closes)?;
    if returns.len() < window {
        return Err(VolEdgeError::insufficient_data(format!(
            "need at least {} prices for a {window}-return window, got {}",
            window + 1,
            closes.len()
        )));
    }

    let annualize = (periods_per_year as f64).sqrt();
    Ok(returns
        .windows(window)
        .map(|w| population_std(w) * annualize)
        .collect())
}

fn population_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    variance.sqrt()
}
