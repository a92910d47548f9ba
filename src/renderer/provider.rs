//! Format providers: the culture-specific symbols used when formatting values

use serde::Deserialize;

/// Supplies culture-specific formatting information to values
pub trait FormatProvider {
    /// Separates the integral and fractional parts of a number
    fn decimal_separator(&self) -> &str;

    /// Separates groups of three integral digits
    fn group_separator(&self) -> &str;

    fn negative_sign(&self) -> &str {
        "-"
    }
}

/// Locale-neutral provider used when the caller supplies none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invariant;

pub static INVARIANT: Invariant = Invariant;

impl FormatProvider for Invariant {
    fn decimal_separator(&self) -> &str {
        "."
    }

    fn group_separator(&self) -> &str {
        ","
    }
}

/// A named set of number formatting symbols, loadable from configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Culture {
    pub name: String,
    pub decimal_separator: String,
    pub group_separator: String,
    pub negative_sign: String,
}

impl Default for Culture {
    fn default() -> Self {
        Self {
            name: "invariant".to_string(),
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            negative_sign: "-".to_string(),
        }
    }
}

impl Culture {
    /// Create a culture with invariant symbols
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self
    }
}

impl FormatProvider for Culture {
    fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    fn group_separator(&self) -> &str {
        &self.group_separator
    }

    fn negative_sign(&self) -> &str {
        &self.negative_sign
    }
}
