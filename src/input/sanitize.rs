use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::input::format::group_number;
use crate::input::validation::parse_decimal_text;

/// raw and display text of a currency-style input field
///
/// `raw_value` holds only digits and at most one `.`; `display_value` is the
/// same text with separators in the integer part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NumericEntryState {
    raw_value: String,
    display_value: String,
}

impl NumericEntryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn is_empty(&self) -> bool {
        self.raw_value.is_empty()
    }

    /// replace the state with the sanitized form of the field's new text
    pub fn apply(&mut self, new_text: &str) {
        *self = sanitize_amount_input(&self.raw_value, new_text);
    }

    pub fn clear(&mut self) {
        self.raw_value.clear();
        self.display_value.clear();
    }

    /// numeric value of the entry, if it holds a complete number
    pub fn parse(&self) -> Option<Money> {
        parse_decimal_text(&self.raw_value).map(Money::from_decimal)
    }
}

/// Sanitize the text of an amount field after a keystroke.
///
/// Everything except ASCII digits and `.` is dropped. Only the first `.` is
/// kept; digits typed after a later `.` join the fraction, so `1.2.3` becomes
/// `1.23`. Leading zeros and a leading or trailing `.` are kept as typed. The
/// result depends only on `new_text`.
pub fn sanitize_amount_input(previous_raw: &str, new_text: &str) -> NumericEntryState {
    if new_text.is_empty() {
        return NumericEntryState::default();
    }

    let raw_value = canonicalize(new_text);
    let display_value = group_number(&raw_value);

    tracing::trace!(
        previous_raw,
        new_text,
        raw = %raw_value,
        display = %display_value,
        "sanitized amount input"
    );

    NumericEntryState {
        raw_value,
        display_value,
    }
}

fn canonicalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut seen_point = false;

    for ch in text.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' if !seen_point => {
                seen_point = true;
                out.push(ch);
            }
            _ => {}
        }
    }

    out
}
