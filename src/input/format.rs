use rust_decimal::Decimal;

use crate::config::{CalculatorConfig, DisplayRounding};

pub const THOUSANDS_SEPARATOR: char = ',';
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// text shown before anything has been calculated
pub const EMPTY_DISPLAY: &str = "0.00";

/// two-decimal, thousands-separated formatter for result figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayFormat {
    rounding: DisplayRounding,
}

impl DisplayFormat {
    pub fn new(rounding: DisplayRounding) -> Self {
        Self { rounding }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.rounding)
    }

    pub fn rounding(&self) -> DisplayRounding {
        self.rounding
    }

    /// Format a figure for display.
    ///
    /// The exact binary value of the `f64` is rounded, so `1.005` (stored as
    /// 1.00499999...) shows as `1.00` under either rounding mode. Missing and
    /// non-finite values show as `0.00`.
    pub fn format(&self, value: Option<f64>) -> String {
        let Some(value) = value else {
            return EMPTY_DISPLAY.to_string();
        };

        if !value.is_finite() {
            tracing::warn!(value, "non-finite figure reached display formatting");
            return EMPTY_DISPLAY.to_string();
        }

        let fixed = match Decimal::from_f64_retain(value) {
            Some(d) => {
                let mut rounded =
                    d.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, self.rounding.strategy());
                if rounded.is_zero() {
                    rounded.set_sign_positive(true);
                }
                rounded.rescale(DISPLAY_DECIMAL_PLACES);
                rounded.to_string()
            }
            // beyond Decimal range; f64 formatting is exact enough at this magnitude
            None => format!("{:.2}", value),
        };

        group_number(&fixed)
    }
}

/// format a figure with the default rounding (half away from zero)
pub fn format_for_display(value: Option<f64>) -> String {
    DisplayFormat::default().format(value)
}

/// insert separators every 3 digits from the right of a digit run
pub fn group_thousands(int_digits: &str) -> String {
    let len = int_digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_digits.chars().enumerate() {
        out.push(ch);
        let remaining = len - (i + 1);
        if remaining > 0 && remaining % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
    }
    out
}

/// group the integer part of a plain number string, keeping sign and fraction
pub fn group_number(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    match unsigned.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
        }
        None => format!("{}{}", sign, group_thousands(unsigned)),
    }
}

/// remove thousands separators
pub fn strip_separators(text: &str) -> String {
    text.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_zero() {
        assert_eq!(format_for_display(None), "0.00");
        assert_eq!(format_for_display(Some(0.0)), "0.00");
        assert_eq!(format_for_display(Some(-0.0)), "0.00");
        assert_eq!(format_for_display(Some(-0.001)), "0.00");
    }

    #[test]
    fn test_pads_and_groups() {
        assert_eq!(format_for_display(Some(1234.5)), "1,234.50");
        assert_eq!(format_for_display(Some(7.0)), "7.00");
        assert_eq!(format_for_display(Some(999.999)), "1,000.00");
        assert_eq!(format_for_display(Some(1_234_567.891)), "1,234,567.89");
        assert_eq!(format_for_display(Some(-98_765.4)), "-98,765.40");
    }

    #[test]
    fn test_result_figures() {
        assert_eq!(format_for_display(Some(1_228.174_984_562_934_2)), "1,228.17");
        assert_eq!(format_for_display(Some(368_452.495_368_880_3)), "368,452.50");
        assert_eq!(format_for_display(Some(916.666_666_666_666_6)), "916.67");
        assert_eq!(format_for_display(Some(475_000.0)), "475,000.00");
    }

    #[test]
    fn test_rounding_modes_on_exact_midpoints() {
        // 0.125 and 2.675 differ: 0.125 is exact in binary, 2.675 is not
        let away = DisplayFormat::new(DisplayRounding::HalfAwayFromZero);
        let even = DisplayFormat::new(DisplayRounding::HalfEven);

        assert_eq!(away.format(Some(0.125)), "0.13");
        assert_eq!(even.format(Some(0.125)), "0.12");
        assert_eq!(away.format(Some(-0.125)), "-0.13");
        assert_eq!(away.format(Some(2.675)), "2.67");
        assert_eq!(even.format(Some(2.675)), "2.67");
    }

    #[test]
    fn test_non_finite_never_displays_nan() {
        assert_eq!(format_for_display(Some(f64::NAN)), "0.00");
        assert_eq!(format_for_display(Some(f64::INFINITY)), "0.00");
    }

    #[test]
    fn test_out_of_decimal_range_falls_back() {
        let text = format_for_display(Some(1e30));
        assert!(text.ends_with(".00"));
        assert!(text.starts_with("1,000,000,000,000,000,0"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("0001234"), "0,001,234");
    }

    #[test]
    fn test_group_number_and_strip() {
        assert_eq!(group_number("1234567.891"), "1,234,567.891");
        assert_eq!(group_number(".5"), ".5");
        assert_eq!(group_number("1000."), "1,000.");
        assert_eq!(strip_separators("1,234,567.891"), "1234567.891");
    }

    #[test]
    fn test_from_config() {
        let config = CalculatorConfig::default().with_rounding(DisplayRounding::HalfEven);
        assert_eq!(DisplayFormat::from_config(&config).rounding(), DisplayRounding::HalfEven);
    }
}
