use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::errors::Result;
use crate::input::{validate_form, DisplayFormat, NumericEntryState};
use crate::types::{LoanResult, RepaymentScheme};

/// live state of the calculator form
///
/// Each field is owned here and only changed through the setters; a result
/// is only ever replaced wholesale by a successful `submit`.
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    config: CalculatorConfig,
    amount: NumericEntryState,
    term: String,
    rate: String,
    scheme: RepaymentScheme,
    result: Option<LoanResult>,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            scheme: config.default_scheme,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// feed the amount field's new text through the sanitizer
    pub fn set_amount(&mut self, text: &str) -> &NumericEntryState {
        self.amount.apply(text);
        &self.amount
    }

    pub fn set_term(&mut self, text: &str) {
        self.term = text.to_string();
    }

    pub fn set_rate(&mut self, text: &str) {
        self.rate = text.to_string();
    }

    pub fn set_scheme(&mut self, scheme: RepaymentScheme) {
        self.scheme = scheme;
    }

    pub fn amount(&self) -> &NumericEntryState {
        &self.amount
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn rate(&self) -> &str {
        &self.rate
    }

    pub fn scheme(&self) -> RepaymentScheme {
        self.scheme
    }

    pub fn result(&self) -> Option<&LoanResult> {
        self.result.as_ref()
    }

    /// validate the fields and calculate
    ///
    /// A rejected submission leaves the previous result in place.
    pub fn submit(&mut self) -> Result<LoanResult> {
        let request = validate_form(self.amount.raw_value(), &self.term, &self.rate, self.scheme)?;
        let result = request.compute();
        self.result = Some(result);
        Ok(result)
    }

    /// reset every field and drop the result
    pub fn clear(&mut self) {
        self.amount.clear();
        self.term.clear();
        self.rate.clear();
        self.scheme = self.config.default_scheme;
        self.result = None;
    }

    pub fn monthly_display(&self) -> String {
        self.display_format()
            .format(self.result.map(|r| r.monthly_payment))
    }

    pub fn total_display(&self) -> String {
        self.display_format()
            .format(self.result.map(|r| r.total_repayment))
    }

    fn display_format(&self) -> DisplayFormat {
        DisplayFormat::from_config(&self.config)
    }

    /// snapshot for a presentation layer
    pub fn view(&self) -> FormView {
        FormView {
            amount: self.amount.display_value().to_string(),
            term: self.term.clone(),
            rate: self.rate.clone(),
            scheme: self.scheme,
            has_result: self.result.is_some(),
            monthly_payment: self.monthly_display(),
            total_repayment: self.total_display(),
        }
    }

    pub fn json(&self) -> String {
        self.view().to_json()
    }
}

/// serializable view of the form and its displayed figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    pub amount: String,
    pub term: String,
    pub rate: String,
    pub scheme: RepaymentScheme,
    pub has_result: bool,
    pub monthly_payment: String,
    pub total_repayment: String,
}

impl FormView {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayRounding;
    use crate::errors::CalculatorError;

    fn filled_form() -> CalculatorForm {
        let mut form = CalculatorForm::new();
        form.set_amount("200000");
        form.set_term("25");
        form.set_rate("5.5");
        form
    }

    #[test]
    fn test_fresh_form_shows_placeholders() {
        let form = CalculatorForm::new();
        assert!(form.result().is_none());
        assert_eq!(form.monthly_display(), "0.00");
        assert_eq!(form.total_display(), "0.00");
        assert_eq!(form.scheme(), RepaymentScheme::Repayment);
    }

    #[test]
    fn test_submit_repayment() {
        let mut form = filled_form();
        assert_eq!(form.amount().display_value(), "200,000");

        let result = form.submit().unwrap();
        assert!((result.monthly_payment - 1_228.17498).abs() < 1e-4);
        assert_eq!(form.monthly_display(), "1,228.17");
        assert_eq!(form.total_display(), "368,452.50");
    }

    #[test]
    fn test_submit_interest_only() {
        let mut form = filled_form();
        form.set_scheme(RepaymentScheme::InterestOnly);

        form.submit().unwrap();
        assert_eq!(form.monthly_display(), "916.67");
        assert_eq!(form.total_display(), "475,000.00");
    }

    #[test]
    fn test_rejected_submit_keeps_previous_result() {
        let mut form = filled_form();
        let first = form.submit().unwrap();

        form.set_amount("");
        let err = form.submit().unwrap_err();
        assert_eq!(err, CalculatorError::MissingField { field: "amount" });
        assert_eq!(form.result(), Some(&first));

        form.set_amount("100");
        form.set_rate("-1");
        assert!(form.submit().is_err());
        assert_eq!(form.result(), Some(&first));
    }

    #[test]
    fn test_resubmit_replaces_result() {
        let mut form = filled_form();
        let first = form.submit().unwrap();

        form.set_rate("0");
        let second = form.submit().unwrap();
        assert_ne!(first, second);
        assert_eq!(form.result(), Some(&second));
        assert_eq!(form.total_display(), "200,000.00");
    }

    #[test]
    fn test_clear_resets_everything() {
        let config = CalculatorConfig::default().with_default_scheme(RepaymentScheme::InterestOnly);
        let mut form = CalculatorForm::with_config(config);
        form.set_amount("1234");
        form.set_term("10");
        form.set_rate("4");
        form.set_scheme(RepaymentScheme::Repayment);
        form.submit().unwrap();

        form.clear();
        assert!(form.amount().is_empty());
        assert_eq!(form.amount().display_value(), "");
        assert_eq!(form.term(), "");
        assert_eq!(form.rate(), "");
        assert_eq!(form.scheme(), RepaymentScheme::InterestOnly);
        assert!(form.result().is_none());
        assert_eq!(form.monthly_display(), "0.00");
    }

    #[test]
    fn test_display_follows_configured_rounding() {
        let config = CalculatorConfig::default().with_rounding(DisplayRounding::HalfEven);
        let mut form = CalculatorForm::with_config(config);
        // 12.5 at 1% a month is exactly 0.125 of interest
        form.set_amount("12.5");
        form.set_term("1");
        form.set_rate("12");
        form.set_scheme(RepaymentScheme::InterestOnly);
        form.submit().unwrap();

        assert_eq!(form.monthly_display(), "0.12");
    }

    #[test]
    fn test_extreme_accepted_inputs_show_real_figures() {
        let mut form = CalculatorForm::new();
        form.set_amount("120000");
        form.set_term("10");
        form.set_rate("0.0000000000000000001");
        let result = form.submit().unwrap();
        assert!(result.monthly_payment.is_finite());
        assert_eq!(form.monthly_display(), "1,000.00");
        assert_eq!(form.total_display(), "120,000.00");

        form.set_amount("200000");
        form.set_term("20000");
        form.set_rate("5.5");
        let result = form.submit().unwrap();
        assert!(result.monthly_payment.is_finite());
        assert!(result.total_repayment.is_finite());
        assert_eq!(form.monthly_display(), "916.67");
    }

    #[test]
    fn test_view_and_json() {
        let mut form = filled_form();
        form.submit().unwrap();

        let view = form.view();
        assert_eq!(view.amount, "200,000");
        assert!(view.has_result);
        assert_eq!(view.monthly_payment, "1,228.17");

        let parsed: FormView = serde_json::from_str(&form.json()).unwrap();
        assert_eq!(parsed, view);
        assert!(form.json().contains("\"scheme\": \"repayment\""));
    }
}
