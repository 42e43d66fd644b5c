use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::payments::compute_repayment;

/// how the principal is paid back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RepaymentScheme {
    /// each payment covers interest and retires part of the principal
    #[default]
    #[serde(rename = "repayment")]
    Repayment,
    /// payments cover interest only, principal due at term end
    #[serde(rename = "interestOnly")]
    InterestOnly,
}

impl RepaymentScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentScheme::Repayment => "repayment",
            RepaymentScheme::InterestOnly => "interestOnly",
        }
    }
}

impl fmt::Display for RepaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepaymentScheme {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "repayment" => Ok(RepaymentScheme::Repayment),
            "interestOnly" => Ok(RepaymentScheme::InterestOnly),
            other => Err(CalculatorError::UnknownScheme {
                value: other.to_string(),
            }),
        }
    }
}

/// longest term whose month count fits in a u32
pub const MAX_TERM_YEARS: u32 = u32::MAX / 12;

/// validated loan parameters
///
/// Construction checks the invariants, so principal > 0, term >= 1 and
/// rate >= 0 always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanRequest {
    principal: Money,
    term_years: u32,
    annual_rate: Rate,
    scheme: RepaymentScheme,
}

impl LoanRequest {
    /// check the invariants and build a request
    pub fn new(
        principal: Money,
        term_years: u32,
        annual_rate: Rate,
        scheme: RepaymentScheme,
    ) -> Result<Self> {
        if !principal.is_positive() {
            return Err(CalculatorError::NonPositivePrincipal { amount: principal });
        }
        if term_years == 0 {
            return Err(CalculatorError::NonPositiveTerm { years: 0 });
        }
        if term_years > MAX_TERM_YEARS {
            return Err(CalculatorError::InvalidNumber {
                field: "term",
                value: term_years.to_string(),
            });
        }
        if annual_rate.is_negative() {
            return Err(CalculatorError::NegativeRate { rate: annual_rate });
        }

        Ok(Self {
            principal,
            term_years,
            annual_rate,
            scheme,
        })
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn scheme(&self) -> RepaymentScheme {
        self.scheme
    }

    /// number of monthly periods
    pub fn periods(&self) -> u32 {
        self.term_years * 12
    }

    /// run the repayment formula for this request
    pub fn compute(&self) -> LoanResult {
        compute_repayment(
            self.principal.to_f64(),
            self.term_years,
            self.annual_rate.percent_f64(),
            self.scheme,
        )
    }
}

/// summary figures for one calculation, at full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_repayment: f64,
}
