//! Pricing and estimation models
//!
//! - Black-Scholes: closed-form baseline pricing, Greeks, IV solver
//! - Monte Carlo: GBM terminal sampling and path simulation
//! - Volatility: realized volatility estimation from close series

pub mod black_scholes;
pub mod monte_carlo;
pub mod volatility;

pub use black_scholes::{
    d1, d2, greeks, implied_volatility, norm_cdf, norm_pdf, price, price_and_greeks,
    NEAR_EXPIRY_YEARS,
};
pub use monte_carlo::{simulate, simulate_paths, PathGrid, SimulationResult, RECOMMENDED_MIN_PATHS};
pub use volatility::{
    historical_volatility, log_returns, rolling_volatility, TRADING_DAYS_PER_YEAR,
};
