//! # vol-edge - Volatility Analytics Engine
//!
//! A volatility-analytics library: theoretical fair values, Greeks, Monte
//! Carlo payoff distributions, and signals comparing market-implied
//! volatility against realized historical volatility.
//!
//! ## Overview
//!
//! Three layers that must agree within known numerical tolerances:
//! - **Closed form**: Black-Scholes fair value and Greeks
//! - **Simulation**: GBM terminal sampling with reproducible seeding
//! - **Signals**: IV/HV regime classification and smile construction
//!
//! Fetching live chains, rendering charts, and the dashboard shell are
//! external collaborators: they deliver normalized quote records and price
//! histories, and render the value objects this crate returns.
//!
//! ## Key Components
//!
//! - **MarketSnapshot**: Validated spot/strike/expiry/rate/vol inputs
//! - **Black-Scholes**: Pricing, Greeks, and an IV solver
//! - **Monte Carlo**: Terminal payoff statistics and path grids
//! - **Volatility**: Historical and rolling realized volatility
//! - **MispricingDetector**: IV vs HV regime plus advisory price divergence
//! - **Smile**: Ordered per-strike skew for one expiry
//!
//! ## Usage
//!
//! ```rust
//! use vol_edge::prelude::*;
//!
//! let snapshot =
//!     MarketSnapshot::new(100.0, 100.0, 0.5, 0.05, 0.20, OptionType::Call).unwrap();
//!
//! // Closed-form value and Greeks
//! let (fair_value, greeks) = price_and_greeks(&snapshot).unwrap();
//!
//! // Reproducible Monte Carlo cross-check
//! let sim = simulate(&snapshot, 25_000, Some(42)).unwrap();
//! assert!((sim.mean_payoff - fair_value).abs() < 0.5);
//!
//! // Regime signal from IV vs realized vol
//! let hv = historical_volatility(&[100.0, 101.5, 99.8, 102.2], 252).unwrap();
//! let report = MispricingDetector::new()
//!     .detect(0.20, hv, fair_value, 7.10)
//!     .unwrap();
//! println!("regime: {} delta: {:.2}", report.vol.regime.label(), greeks.delta);
//! ```
//!
//! ## What This Crate Does
//!
//! - Prices European options and computes closed-form Greeks
//! - Simulates terminal distributions and full GBM paths, bit-reproducibly
//! - Estimates realized volatility and classifies IV/HV regimes
//! - Validates collaborator data at the boundary with typed errors
//!
//! ## What This Crate Does NOT Do
//!
//! - Fetch market data or talk to any network
//! - Execute orders or aggregate portfolios
//! - Persist analyses
//! - Model stochastic volatility (Heston-style dynamics are future work)

pub mod core;
pub mod data;
pub mod models;
pub mod signal;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{Greeks, MarketSnapshot, OptionType, VolEdgeError, VolEdgeResult};

    // Boundary data contracts
    pub use crate::data::{PriceHistory, PricePoint, QuoteRecord};

    // Models
    pub use crate::models::{
        greeks as bs_greeks,
        historical_volatility,
        implied_volatility,
        norm_cdf,
        norm_pdf,

        // Black-Scholes
        price as bs_price,
        price_and_greeks,
        rolling_volatility,
        // Monte Carlo
        simulate,
        simulate_paths,
        PathGrid,
        SimulationResult,
        RECOMMENDED_MIN_PATHS,
        TRADING_DAYS_PER_YEAR,
    };

    // Signals
    pub use crate::signal::{
        build_smile, smile_from_quotes, DetectorConfig, MispricingDetector, MispricingReport,
        SmileCurve, VolRegime, VolatilityReport,
    };
}

// Re-export main types at crate root
pub use crate::core::{VolEdgeError, VolEdgeResult};
pub use crate::signal::{MispricingDetector, MispricingReport};
