//! Volatility smile construction
//!
//! Aggregates per-strike implied volatilities for a single expiry into an
//! ordered skew curve. No smoothing or interpolation happens here - the curve
//! is the raw observed skew, left to the rendering collaborator to visualize.

use serde::Serialize;

use crate::core::{VolEdgeError, VolEdgeResult};
use crate::data::QuoteRecord;

/// Strikes closer than this are treated as the same strike
const STRIKE_EPS: f64 = 1e-6;

/// Ordered (strike, implied vol) skew curve for one expiry
///
/// Serialize-only: curves are rebuilt through `build_smile` so ordering and
/// uniqueness hold by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmileCurve {
    points: Vec<(f64, f64)>,
}

impl SmileCurve {
    /// (strike, implied_vol) pairs, strike ascending
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn strikes(&self) -> Vec<f64> {
        self.points.iter().map(|&(k, _)| k).collect()
    }

    pub fn vols(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, v)| v).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Implied vol at an exact strike, if present
    pub fn vol_at(&self, strike: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|(k, _)| (k - strike).abs() < STRIKE_EPS)
            .map(|&(_, v)| v)
    }

    /// Point closest to the given spot
    pub fn atm_point(&self, spot: f64) -> Option<(f64, f64)> {
        self.points
            .iter()
            .min_by(|(a, _), (b, _)| {
                let da = (spot - a).abs();
                let db = (spot - b).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .copied()
    }
}

/// Build a smile curve from (strike, implied_vol) pairs
///
/// Pairs are sorted by strike; a duplicate strike is a caller data error,
/// never silently deduplicated.
pub fn build_smile(pairs: &[(f64, f64)]) -> VolEdgeResult<SmileCurve> {
    for &(strike, vol) in pairs {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(VolEdgeError::invalid_input(format!(
                "smile strike must be positive and finite, got {strike}"
            )));
        }
        if !vol.is_finite() || vol < 0.0 {
            return Err(VolEdgeError::invalid_input(format!(
                "smile vol must be non-negative and finite, got {vol}"
            )));
        }
    }

    let mut points = pairs.to_vec();
    points.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    for pair in points.windows(2) {
        if (pair[1].0 - pair[0].0).abs() < STRIKE_EPS {
            return Err(VolEdgeError::DuplicateStrike(pair[0].0));
        }
    }

    Ok(SmileCurve { points })
}

/// Build a smile curve from quote records sharing one expiry
///
/// Every quote must carry a feed-supplied implied vol; mixed expiries and
/// missing IVs are caller data errors.
pub fn smile_from_quotes(quotes: &[QuoteRecord]) -> VolEdgeResult<SmileCurve> {
    let first = quotes.first().ok_or_else(|| {
        VolEdgeError::insufficient_data("no quotes supplied for smile construction")
    })?;

    let mut pairs = Vec::with_capacity(quotes.len());
    for q in quotes {
        if q.expiry != first.expiry {
            return Err(VolEdgeError::invalid_input(format!(
                "smile quotes must share one expiry: {} vs {}",
                first.expiry, q.expiry
            )));
        }
        q.validate()?;

        let iv = q.implied_vol.ok_or_else(|| {
            VolEdgeError::invalid_input(format!(
                "quote at strike {} has no implied volatility",
                q.strike
            ))
        })?;
        pairs.push((q.strike, iv));
    }

    build_smile(&pairs)
}
