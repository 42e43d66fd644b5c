//! text handling for the calculator form: live sanitizing of the amount
//! field, result formatting and the validation gate in front of the engine

pub mod format;
pub mod sanitize;
pub mod validation;

pub use format::{
    format_for_display, group_number, group_thousands, strip_separators, DisplayFormat,
    EMPTY_DISPLAY, THOUSANDS_SEPARATOR,
};
pub use sanitize::{sanitize_amount_input, NumericEntryState};
pub use validation::validate_form;
