//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing
//! - Greeks computation
//! - Implied volatility solver (Newton-Raphson with bisection fallback)
//!
//! The closed form serves as the baseline the Monte Carlo engine must agree
//! with, and converts market prices to implied volatilities.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{Greeks, MarketSnapshot, OptionType, VolEdgeError, VolEdgeResult};

/// Below this time to expiry the price collapses to intrinsic value and the
/// Greeks saturate, instead of dividing by a vanishing σ√T.
pub const NEAR_EXPIRY_YEARS: f64 = 1e-8;

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, vol, time) - vol * time.sqrt()
}

/// Black-Scholes fair value
pub fn price(snapshot: &MarketSnapshot) -> VolEdgeResult<f64> {
    let (spot, strike) = (snapshot.spot(), snapshot.strike());
    let time = snapshot.time_to_expiry();

    if time <= NEAR_EXPIRY_YEARS {
        return Ok(snapshot.intrinsic());
    }

    let rate = snapshot.rate();
    let vol = snapshot.volatility();
    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = snapshot.discount_factor();

    let value = match snapshot.option_type() {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    if !value.is_finite() {
        return Err(VolEdgeError::numerical(format!(
            "non-finite fair value for spot={spot}, strike={strike}, vol={vol}, t={time}"
        )));
    }

    Ok(value)
}

/// Black-Scholes Greeks
pub fn greeks(snapshot: &MarketSnapshot) -> VolEdgeResult<Greeks> {
    let (spot, strike) = (snapshot.spot(), snapshot.strike());
    let time = snapshot.time_to_expiry();

    if time <= NEAR_EXPIRY_YEARS {
        // At expiry delta saturates and the remaining Greeks vanish
        let delta = match snapshot.option_type() {
            OptionType::Call => {
                if spot > strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if spot < strike {
                    -1.0
                } else {
                    0.0
                }
            }
        };
        return Ok(Greeks::new(delta, 0.0, 0.0, 0.0, 0.0));
    }

    let rate = snapshot.rate();
    let vol = snapshot.volatility();
    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = snapshot.discount_factor();
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);

    // Gamma and vega are identical for calls and puts
    let gamma = pdf_d1 / (spot * vol * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t / 100.0;

    let decay = -spot * pdf_d1 * vol / (2.0 * sqrt_t);
    let (delta, theta, rho) = match snapshot.option_type() {
        OptionType::Call => (
            norm_cdf(d1),
            (decay - rate * strike * df * norm_cdf(d2)) / 365.0,
            strike * time * df * norm_cdf(d2) / 100.0,
        ),
        OptionType::Put => (
            norm_cdf(d1) - 1.0,
            (decay + rate * strike * df * norm_cdf(-d2)) / 365.0,
            -strike * time * df * norm_cdf(-d2) / 100.0,
        ),
    };

    let greeks = Greeks::new(delta, gamma, vega, theta, rho);
    if !greeks.is_finite() {
        return Err(VolEdgeError::numerical(format!(
            "non-finite Greeks for spot={spot}, strike={strike}, vol={vol}, t={time}"
        )));
    }

    Ok(greeks)
}

/// Fair value and Greeks in one call
pub fn price_and_greeks(snapshot: &MarketSnapshot) -> VolEdgeResult<(f64, Greeks)> {
    Ok((price(snapshot)?, greeks(snapshot)?))
}

/// Implied volatility solver using Newton-Raphson with bisection fallback
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
    option_type: OptionType,
) -> VolEdgeResult<f64> {
    if !market_price.is_finite() || market_price <= 0.0 {
        return Err(VolEdgeError::invalid_input(format!(
            "market price must be positive and finite, got {market_price}"
        )));
    }
    if !time.is_finite() || time <= 0.0 {
        return Err(VolEdgeError::invalid_input(format!(
            "time to expiry must be positive and finite, got {time}"
        )));
    }
    if spot <= 0.0 || strike <= 0.0 {
        return Err(VolEdgeError::invalid_input(
            "spot and strike must be positive",
        ));
    }

    // Price below discounted intrinsic admits no volatility
    let intrinsic = option_type.intrinsic(spot, strike);
    let df = (-rate * time).exp();
    if market_price < intrinsic * df * 0.99 {
        return Err(VolEdgeError::numerical("price below intrinsic value"));
    }

    // Initial guess using Brenner-Subrahmanyam approximation
    let atm_approx = market_price / (0.4 * spot * time.sqrt());
    let mut vol = atm_approx.clamp(0.01, 3.0);

    let max_iter = 100;
    let tol = 1e-8;

    for _ in 0..max_iter {
        let snapshot = MarketSnapshot::new(spot, strike, time, rate, vol, option_type)?;
        let diff = price(&snapshot)? - market_price;

        if diff.abs() < tol {
            return Ok(vol);
        }

        // Unscaled vega for the Newton step
        let d1 = d1(spot, strike, rate, vol, time);
        let vega = spot * norm_pdf(d1) * time.sqrt();

        if vega.abs() < 1e-12 {
            break; // Vega too small, switch to bisection
        }

        let new_vol = vol - diff / vega;
        if new_vol <= 0.0 || new_vol > 5.0 {
            break; // Out of bounds, switch to bisection
        }

        vol = new_vol;
    }

    bisection_iv(market_price, spot, strike, rate, time, option_type)
}

/// Bisection method for IV (slower but more robust)
fn bisection_iv(
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
    option_type: OptionType,
) -> VolEdgeResult<f64> {
    let mut low = 0.001;
    let mut high = 5.0;
    let tol = 1e-8;
    let max_iter = 100;

    for _ in 0..max_iter {
        let mid = (low + high) / 2.0;
        let snapshot = MarketSnapshot::new(spot, strike, time, rate, mid, option_type)?;
        let diff = price(&snapshot)? - market_price;

        if diff.abs() < tol {
            return Ok(mid);
        }

        if diff > 0.0 {
            high = mid;
        } else {
            low = mid;
        }

        if (high - low) < tol {
            return Ok(mid);
        }
    }

    Err(VolEdgeError::numerical("IV solver did not converge"))
}
