use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::input::format::strip_separators;
use crate::types::{LoanRequest, RepaymentScheme, MAX_TERM_YEARS};

/// Validate the raw text of the three form fields and build a request.
///
/// Empty fields are reported before malformed or out-of-range ones. The
/// amount may carry thousands separators; the term must be a whole number
/// of years.
pub fn validate_form(
    amount: &str,
    term: &str,
    rate: &str,
    scheme: RepaymentScheme,
) -> Result<LoanRequest> {
    check_fields(amount, term, rate, scheme).map_err(|e| {
        tracing::warn!(error = %e, amount, term, rate, "rejected loan form");
        e
    })
}

fn check_fields(
    amount: &str,
    term: &str,
    rate: &str,
    scheme: RepaymentScheme,
) -> Result<LoanRequest> {
    for (field, text) in [("amount", amount), ("term", term), ("rate", rate)] {
        if text.trim().is_empty() {
            return Err(CalculatorError::MissingField { field });
        }
    }

    let principal = parse_decimal_text(amount)
        .map(Money::from_decimal)
        .ok_or_else(|| invalid("amount", amount))?;

    let years: i64 = term.trim().parse().map_err(|_| invalid("term", term))?;
    if years <= 0 {
        return Err(CalculatorError::NonPositiveTerm { years });
    }
    let term_years = u32::try_from(years)
        .ok()
        .filter(|y| *y <= MAX_TERM_YEARS)
        .ok_or_else(|| invalid("term", term))?;

    let annual_rate = parse_decimal_text(rate)
        .map(Rate::from_percent)
        .ok_or_else(|| invalid("rate", rate))?;

    LoanRequest::new(principal, term_years, annual_rate, scheme)
}

fn invalid(field: &'static str, value: &str) -> CalculatorError {
    CalculatorError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}

/// Parse numeric field text exactly.
///
/// Separators are ignored, a bare leading `.` reads as `0.` and a trailing
/// `.` is dropped, so partially typed amounts still parse.
pub(crate) fn parse_decimal_text(text: &str) -> Option<Decimal> {
    let cleaned = strip_separators(text.trim());
    let (sign, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", cleaned.as_str()),
    };

    let unsigned = unsigned.strip_suffix('.').unwrap_or(unsigned);
    if unsigned.is_empty() {
        return None;
    }

    let normalized = if unsigned.starts_with('.') {
        format!("{}0{}", sign, unsigned)
    } else {
        format!("{}{}", sign, unsigned)
    };

    Decimal::from_str_exact(&normalized).ok()
}
