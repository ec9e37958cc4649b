//! Configuration for the mispricing detector

use serde::{Deserialize, Serialize};

/// Configuration for IV/HV regime classification
///
/// The threshold is a heuristic, not the outcome of a statistical test.
/// Treat the default as a starting point to tune, not a calibrated boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Absolute IV-HV spread (in volatility points) beyond which the
    /// regime is classified as over/underpriced
    /// Default: 0.05
    pub threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self { threshold: 0.05 }
    }
}

impl DetectorConfig {
    /// Aggressive settings: lower threshold, more non-fair classifications
    pub fn aggressive() -> Self {
        Self { threshold: 0.03 }
    }

    /// Conservative settings: higher threshold, fewer non-fair classifications
    pub fn conservative() -> Self {
        Self { threshold: 0.10 }
    }
}
