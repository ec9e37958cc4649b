//! Option Greeks
//!
//! First-order sensitivities of the option price to market parameters.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
///
/// Conventions: theta is per calendar day, vega and rho are per one
/// percentage point move in volatility and rate respectively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Vega: dV/dσ (sensitivity to volatility, per 1%)
    pub vega: f64,
    /// Theta: dV/dt (time decay, per day)
    pub theta: f64,
    /// Rho: dV/dr (sensitivity to interest rate, per 1%)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, vega: f64, theta: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// All five sensitivities are finite
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.vega.is_finite()
            && self.theta.is_finite()
            && self.rho.is_finite()
    }
}
