//! Mispricing detection
//!
//! Compares market-implied volatility against realized historical volatility
//! and classifies a regime, alongside an advisory model-vs-market price
//! divergence. The divergence never drives the classification - microstructure
//! noise makes any universal price cutoff unreliable.

use serde::{Deserialize, Serialize};

use super::config::DetectorConfig;
use crate::core::{VolEdgeError, VolEdgeResult};

/// Volatility regime classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolRegime {
    /// Implied exceeds historical by more than the threshold
    Overpriced,
    /// Historical exceeds implied by more than the threshold
    Underpriced,
    /// Spread within the threshold band
    Fair,
}

impl VolRegime {
    pub fn label(&self) -> &'static str {
        match self {
            VolRegime::Overpriced => "overpriced",
            VolRegime::Underpriced => "underpriced",
            VolRegime::Fair => "fair",
        }
    }
}

/// IV vs HV comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityReport {
    /// Annualized realized volatility
    pub historical_vol: f64,
    /// Annualized market-implied volatility
    pub implied_vol: f64,
    /// implied_vol - historical_vol
    pub spread: f64,
    /// Classification under the configured threshold
    pub regime: VolRegime,
}

/// Detector output: the volatility report plus the advisory price divergence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MispricingReport {
    pub vol: VolatilityReport,
    /// (model_price - market_price) / market_price, advisory only
    pub price_divergence: f64,
}

/// Classifies IV/HV regimes and reports model-vs-market divergence
pub struct MispricingDetector {
    config: DetectorConfig,
}

impl MispricingDetector {
    /// Create a detector with the default configuration
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Compare implied against historical volatility and model against
    /// market price
    pub fn detect(
        &self,
        implied_vol: f64,
        historical_vol: f64,
        model_price: f64,
        market_price: f64,
    ) -> VolEdgeResult<MispricingReport> {
        for (name, v) in [("implied_vol", implied_vol), ("historical_vol", historical_vol)] {
            if !v.is_finite() || v < 0.0 {
                return Err(VolEdgeError::invalid_input(format!(
                    "{name} must be non-negative and finite, got {v}"
                )));
            }
        }
        if !model_price.is_finite() {
            return Err(VolEdgeError::invalid_input(format!(
                "model price must be finite, got {model_price}"
            )));
        }
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(VolEdgeError::invalid_input(format!(
                "market price must be positive and finite, got {market_price}"
            )));
        }

        let spread = implied_vol - historical_vol;
        let regime = if spread > self.config.threshold {
            VolRegime::Overpriced
        } else if spread < -self.config.threshold {
            VolRegime::Underpriced
        } else {
            VolRegime::Fair
        };

        let price_divergence = (model_price - market_price) / market_price;

        tracing::debug!(
            spread,
            threshold = self.config.threshold,
            regime = regime.label(),
            price_divergence,
            "classified volatility regime"
        );

        Ok(MispricingReport {
            vol: VolatilityReport {
                historical_vol,
                implied_vol,
                spread,
                regime,
            },
            price_divergence,
        })
    }
}

impl Default for MispricingDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overpriced() {
        let detector = MispricingDetector::new();
        let report = detector.detect(0.35, 0.20, 5.0, 5.0).unwrap();

        assert_eq!(report.vol.regime, VolRegime::Overpriced);
        assert!((report.vol.spread - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_fair() {
        let detector = MispricingDetector::new();
        let report = detector.detect(0.22, 0.20, 5.0, 5.0).unwrap();

        assert_eq!(report.vol.regime, VolRegime::Fair);
        assert_eq!(report.price_divergence, 0.0);
    }

    #[test]
    fn test_underpriced() {
        let detector = MispricingDetector::new();
        let report = detector.detect(0.12, 0.20, 5.0, 5.0).unwrap();

        assert_eq!(report.vol.regime, VolRegime::Underpriced);
    }

    #[test]
    fn test_threshold_boundary_is_fair() {
        // Spread exactly at the threshold stays fair; only strictly beyond flips
        let detector = MispricingDetector::with_config(DetectorConfig { threshold: 0.05 });
        let report = detector.detect(0.25, 0.20, 5.0, 5.0).unwrap();

        assert_eq!(report.vol.regime, VolRegime::Fair);
    }

    #[test]
    fn test_price_divergence() {
        let detector = MispricingDetector::new();
        let report = detector.detect(0.20, 0.20, 6.0, 5.0).unwrap();

        assert!((report.price_divergence - 0.2).abs() < 1e-12);
        // Divergence alone never flips the regime
        assert_eq!(report.vol.regime, VolRegime::Fair);
    }

    #[test]
    fn test_custom_config() {
        let detector = MispricingDetector::with_config(DetectorConfig::conservative());
        let report = detector.detect(0.28, 0.20, 5.0, 5.0).unwrap();

        // 0.08 spread is fair under the 0.10 conservative threshold
        assert_eq!(report.vol.regime, VolRegime::Fair);
    }

    #[test]
    fn test_invalid_inputs() {
        let detector = MispricingDetector::new();

        assert!(detector.detect(f64::NAN, 0.2, 5.0, 5.0).is_err());
        assert!(detector.detect(-0.1, 0.2, 5.0, 5.0).is_err());
        assert!(detector.detect(0.2, 0.2, 5.0, 0.0).is_err());
        assert!(detector.detect(0.2, 0.2, f64::INFINITY, 5.0).is_err());
    }
}
