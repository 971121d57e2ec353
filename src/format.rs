//! Number formatting for balance amounts and USD values.

use serde::{Deserialize, Serialize};

/// Decimal places used for USD values.
const USD_DECIMALS: usize = 2;

/// Upper bound on configurable decimal places.
pub const MAX_DECIMALS: usize = 18;

/// Presentation settings for amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountFormat {
    /// Fixed number of decimal places.
    pub decimals: usize,
    /// Group the integer part in thousands with `,`.
    pub thousands_separator: bool,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self {
            decimals: 2,
            thousands_separator: true,
        }
    }
}

impl AmountFormat {
    /// Creates a format, clamping `decimals` to [`MAX_DECIMALS`].
    #[must_use]
    pub const fn new(decimals: usize, thousands_separator: bool) -> Self {
        let decimals = if decimals > MAX_DECIMALS {
            MAX_DECIMALS
        } else {
            decimals
        };
        Self {
            decimals,
            thousands_separator,
        }
    }

    /// Formats a balance amount.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let format = AmountFormat::default();
    /// assert_eq!(format.format_amount(1234.5), "1,234.50");
    /// ```
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        self.format_fixed(amount, self.decimals.min(MAX_DECIMALS))
    }

    /// Formats a USD value with two decimals and a `$` prefix.
    #[must_use]
    pub fn format_usd(&self, value: f64) -> String {
        let formatted = self.format_fixed(value, USD_DECIMALS);
        match formatted.strip_prefix('-') {
            Some(digits) => format!("-${digits}"),
            None => format!("${formatted}"),
        }
    }

    fn format_fixed(&self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut result = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
        if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            result.push('-');
        }
        if self.thousands_separator {
            result.push_str(&group_thousands(int_part));
        } else {
            result.push_str(int_part);
        }
        if let Some(frac_part) = frac_part {
            result.push('.');
            result.push_str(frac_part);
        }
        result
    }
}

/// Inserts `,` between groups of three digits.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(group_thousands("1000"), "1,000");
/// assert_eq!(group_thousands("1000000"), "1,000,000");
/// ```
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
