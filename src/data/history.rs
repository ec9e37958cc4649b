//! Underlying price history
//!
//! A validated daily close series from the market-data collaborator, used for
//! historical volatility estimation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{VolEdgeError, VolEdgeResult};
use crate::models::volatility;

/// One daily close
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Ordered daily close series
///
/// Serialize-only: histories are rebuilt through `new` so ordering and
/// positivity hold by construction.
#[derive(Debug, Clone, Serialize)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Build a history, requiring finite positive closes and strictly
    /// ascending dates
    pub fn new(points: Vec<PricePoint>) -> VolEdgeResult<Self> {
        if points.is_empty() {
            return Err(VolEdgeError::insufficient_data("empty price history"));
        }

        for p in &points {
            if !p.close.is_finite() || p.close <= 0.0 {
                return Err(VolEdgeError::invalid_input(format!(
                    "close on {} must be positive and finite, got {}",
                    p.date, p.close
                )));
            }
        }

        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(VolEdgeError::invalid_input(format!(
                    "price history dates must be strictly ascending: {} then {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Close prices in date order
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Most recent close
    pub fn last_close(&self) -> f64 {
        // non-empty by construction
        self.points[self.points.len() - 1].close
    }

    /// Annualized historical volatility over the whole series
    pub fn historical_volatility(&self, periods_per_year: u32) -> VolEdgeResult<f64> {
        volatility::historical_volatility(&self.closes(), periods_per_year)
    }

    /// Rolling annualized historical volatility
    pub fn rolling_volatility(
        &self,
        window: usize,
        periods_per_year: u32,
    ) -> VolEdgeResult<Vec<f64>> {
        volatility::rolling_volatility(&self.closes(), window, periods_per_year)
    }
}
