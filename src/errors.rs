use thiserror::Error;

use crate::decimal::{Money, Rate};

/// message shown to the user for any rejected submission
pub const FORM_CORRECTION_MESSAGE: &str = "Please correct the highlighted fields";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("missing field: {field}")]
    MissingField {
        field: &'static str,
    },

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },

    #[error("principal must be positive: {amount}")]
    NonPositivePrincipal {
        amount: Money,
    },

    #[error("term must be at least one year: {years}")]
    NonPositiveTerm {
        years: i64,
    },

    #[error("interest rate cannot be negative: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("unknown repayment scheme: {value:?}")]
    UnknownScheme {
        value: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl CalculatorError {
    /// true for every failure raised by the form validation gate
    pub fn is_validation(&self) -> bool {
        !matches!(self, CalculatorError::InvalidConfiguration { .. })
    }

    /// user-facing text; validation failures are not distinguished here
    pub fn user_message(&self) -> String {
        match self {
            CalculatorError::InvalidConfiguration { .. } => self.to_string(),
            _ => FORM_CORRECTION_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
