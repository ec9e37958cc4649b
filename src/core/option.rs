//! Option type and payoff primitives

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Is a terminal spot in the money?
    pub fn is_itm(&self, spot: f64, strike: f64) -> bool {
        match self {
            OptionType::Call => spot > strike,
            OptionType::Put => spot < strike,
        }
    }

    /// Breakeven underlying price at expiry for a given premium paid
    pub fn breakeven(&self, strike: f64, premium: f64) -> f64 {
        match self {
            OptionType::Call => strike + premium,
            OptionType::Put => strike - premium,
        }
    }
}
