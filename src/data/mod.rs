//! Inbound data contracts
//!
//! Normalized shapes the market-data collaborator must deliver:
//! - QuoteRecord: one option quote (bid/ask/last, quoted IV)
//! - PriceHistory: daily closes for historical volatility
//!
//! Fetching, caching, and feed-specific parsing live outside this crate.

pub mod history;
pub mod quote;

pub use history::*;
pub use quote::*;
