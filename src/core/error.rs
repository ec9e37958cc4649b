//! Error types for the volatility analytics engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolEdgeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Duplicate strike {0}")]
    DuplicateStrike(f64),

    #[error("Numerical error: {0}")]
    Numerical(String),
}

pub type VolEdgeResult<T> = Result<T, VolEdgeError>;

impl VolEdgeError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Self::InsufficientData(msg.into())
    }

    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::Numerical(msg.into())
    }
}
