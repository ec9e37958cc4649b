//! Normalized option quote records
//!
//! The market-data collaborator hands the engine quote records in this shape;
//! nothing here fetches anything. Fields that a feed may omit are `Option`s,
//! and anything a computation needs must be present and finite - a missing or
//! NaN field is a typed error, never a silent default.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{MarketSnapshot, OptionType, VolEdgeError, VolEdgeResult};

/// Days per year used to convert calendar expiries to year fractions
const DAYS_PER_YEAR: f64 = 365.25;

/// Normalized option market quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Strike price
    pub strike: f64,
    /// Expiration date
    pub expiry: NaiveDate,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Bid price
    pub bid: Option<f64>,
    /// Ask price
    pub ask: Option<f64>,
    /// Last traded price
    pub last: Option<f64>,
    /// Implied volatility quoted by the feed
    pub implied_vol: Option<f64>,
}

impl QuoteRecord {
    pub fn new(strike: f64, expiry: NaiveDate, option_type: OptionType) -> Self {
        Self {
            strike,
            expiry,
            option_type,
            bid: None,
            ask: None,
            last: None,
            implied_vol: None,
        }
    }

    /// Mid price from bid/ask
    pub fn mid(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }

    /// Best available market price (mid > last > bid)
    pub fn best_price(&self) -> Option<f64> {
        self.mid().or(self.last).or(self.bid)
    }

    /// Bid-ask spread
    pub fn spread(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(b), Some(a)) => Some(a - b),
            _ => None,
        }
    }

    /// Check every present field for NaN/negative values
    pub fn validate(&self) -> VolEdgeResult<()> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(VolEdgeError::invalid_input(format!(
                "quote strike must be positive and finite, got {}",
                self.strike
            )));
        }

        for (name, field) in [
            ("bid", self.bid),
            ("ask", self.ask),
            ("last", self.last),
            ("implied_vol", self.implied_vol),
        ] {
            if let Some(v) = field {
                if !v.is_finite() || v < 0.0 {
                    return Err(VolEdgeError::invalid_input(format!(
                        "quote {name} must be non-negative and finite, got {v}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Time to expiry in years from a valuation date
    pub fn time_to_expiry(&self, as_of: NaiveDate) -> VolEdgeResult<f64> {
        let days = (self.expiry - as_of).num_days();
        if days <= 0 {
            return Err(VolEdgeError::invalid_input(format!(
                "quote expired: expiry {} is not after valuation date {}",
                self.expiry, as_of
            )));
        }
        Ok(days as f64 / DAYS_PER_YEAR)
    }

    /// Convert into a validated snapshot using the quoted implied volatility
    ///
    /// Requires the feed to have supplied an IV; quotes without one cannot be
    /// normalized and are rejected rather than defaulted.
    pub fn to_snapshot(
        &self,
        spot: f64,
        rate: f64,
        as_of: NaiveDate,
    ) -> VolEdgeResult<MarketSnapshot> {
        self.validate()?;

        let iv = self.implied_vol.ok_or_else(|| {
            VolEdgeError::invalid_input(format!(
                "quote at strike {} has no implied volatility",
                self.strike
            ))
        })?;
        let tte = self.time_to_expiry(as_of)?;

        MarketSnapshot::new(spot, self.strike, tte, rate, iv, self.option_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> QuoteRecord {
        let mut q = QuoteRecord::new(
            105.0,
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            OptionType::Call,
        );
        q.bid = Some(4.8);
        q.ask = Some(5.2);
        q.implied_vol = Some(0.22);
        q
    }

    #[test]
    fn test_mid_and_best_price() {
        let q = quote();
        assert!((q.mid().unwrap() - 5.0).abs() < 1e-12);
        assert_eq!(q.best_price(), q.mid());

        let mut no_ask = q.clone();
        no_ask.ask = None;
        no_ask.last = Some(4.9);
        assert_eq!(no_ask.best_price(), Some(4.9));
    }

    #[test]
    fn test_to_snapshot() {
        let q = quote();
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let snap = q.to_snapshot(100.0, 0.05, as_of).unwrap();

        assert_eq!(snap.strike(), 105.0);
        assert_eq!(snap.volatility(), 0.22);
        // ~5 months
        assert!(snap.time_to_expiry() > 0.4 && snap.time_to_expiry() < 0.42);
    }

    #[test]
    fn test_missing_iv_rejected() {
        let mut q = quote();
        q.implied_vol = None;
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();

        assert!(matches!(
            q.to_snapshot(100.0, 0.05, as_of),
            Err(VolEdgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nan_field_rejected() {
        let mut q = quote();
        q.bid = Some(f64::NAN);
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_expired_quote_rejected() {
        let q = quote();
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        assert!(q.time_to_expiry(as_of).is_err());
    }
}
