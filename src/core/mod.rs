//! Core data types for the volatility analytics engine
//!
//! Defines fundamental types:
//! - MarketSnapshot: Validated spot/strike/expiry/rate/vol inputs
//! - OptionType: Call/put payoff primitives
//! - Greeks: Price sensitivities
//! - VolEdgeError: Typed error taxonomy

pub mod error;
pub mod greeks;
pub mod option;
pub mod snapshot;

pub use error::*;
pub use greeks::*;
pub use option::*;
pub use snapshot::*;
