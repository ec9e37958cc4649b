//! Signal layer
//!
//! Statistical comparison and classification on top of the pricing engines:
//! - MispricingDetector: IV vs HV regime, model vs market divergence
//! - Smile construction: ordered per-strike skew for one expiry

pub mod config;
pub mod mispricing;
pub mod smile;

pub use config::*;
pub use mispricing::*;
pub use smile::*;
