use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};
use crate::types::RepaymentScheme;

/// calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalculatorConfig {
    /// scheme selected on a fresh or cleared form
    pub default_scheme: RepaymentScheme,
    /// how displayed figures are rounded to cents
    pub rounding: DisplayRounding,
}

/// rounding applied when a figure is shown with two decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayRounding {
    /// 0.125 -> 0.13, -0.125 -> -0.13
    #[default]
    HalfAwayFromZero,
    /// banker's rounding: 0.125 -> 0.12
    HalfEven,
}

impl DisplayRounding {
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            DisplayRounding::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            DisplayRounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl CalculatorConfig {
    /// load from a JSON document; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    pub fn with_default_scheme(mut self, scheme: RepaymentScheme) -> Self {
        self.default_scheme = scheme;
        self
    }

    pub fn with_rounding(mut self, rounding: DisplayRounding) -> Self {
        self.rounding = rounding;
        self
    }
}
