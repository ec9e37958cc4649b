//! Market snapshot - the normalized input record for all pricing engines
//!
//! A snapshot bundles everything the engines need: spot, strike, time to
//! expiry, risk-free rate, a volatility estimate, and the option type. It is
//! validated on construction and immutable afterwards, so downstream code
//! never has to re-check its fields.

use serde::Serialize;

use super::error::{VolEdgeError, VolEdgeResult};
use super::option::OptionType;

/// Validated, immutable market inputs for a single option
///
/// Serialize-only: snapshots are rebuilt through `new` so the validation
/// invariant survives a round trip through a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketSnapshot {
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl MarketSnapshot {
    /// Build a snapshot, rejecting non-positive or non-finite inputs
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> VolEdgeResult<Self> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(VolEdgeError::invalid_input(format!(
                "spot must be positive and finite, got {spot}"
            )));
        }
        if !strike.is_finite() || strike <= 0.0 {
            return Err(VolEdgeError::invalid_input(format!(
                "strike must be positive and finite, got {strike}"
            )));
        }
        if !time_to_expiry.is_finite() || time_to_expiry <= 0.0 {
            return Err(VolEdgeError::invalid_input(format!(
                "time to expiry must be positive and finite, got {time_to_expiry}"
            )));
        }
        if !rate.is_finite() {
            return Err(VolEdgeError::invalid_input(format!(
                "rate must be finite, got {rate}"
            )));
        }
        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(VolEdgeError::invalid_input(format!(
                "volatility must be positive and finite, got {volatility}"
            )));
        }

        Ok(Self {
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
            option_type,
        })
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years
    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    /// Continuously compounded risk-free rate
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Annualized volatility estimate (implied or historical)
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time_to_expiry).exp()
    }

    /// Intrinsic value at current spot
    pub fn intrinsic(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Same snapshot with a different volatility estimate
    pub fn with_volatility(&self, volatility: f64) -> VolEdgeResult<Self> {
        Self::new(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.rate,
            volatility,
            self.option_type,
        )
    }
}
