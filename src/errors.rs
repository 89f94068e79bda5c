use thiserror::Error;

use crate::decimal::Rate;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("payments per year must be greater than zero")]
    ZeroPaymentsPerYear,

    #[error("total payments must be greater than zero")]
    ZeroPayments,

    #[error("negative interest rate: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("decimal overflow during {operation}")]
    Overflow {
        operation: &'static str,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
