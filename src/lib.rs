pub mod config;
pub mod decimal;
pub mod errors;
pub mod form;
pub mod input;
pub mod payments;
pub mod types;

// re-export key types
pub use config::{CalculatorConfig, DisplayRounding};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use form::{CalculatorForm, FormView};
pub use input::{
    format_for_display, sanitize_amount_input, strip_separators, validate_form, DisplayFormat,
    NumericEntryState,
};
pub use payments::{compute_repayment, AmortizationCalculator};
pub use types::{LoanRequest, LoanResult, RepaymentScheme};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
