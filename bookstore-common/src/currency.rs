//! Price formatting for the book table
//!
//! Defaults follow the th-TH decimal style used by the store: `฿` prefix,
//! comma thousands separator, dot decimal separator, two fixed digits.
//! Rounding is half away from zero on the shortest decimal form of the
//! amount, so `1.005` shows as `1.01`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// How prices are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub fraction_digits: usize,
    /// Shown when a book has no price (or a non-finite one)
    pub missing_placeholder: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "฿".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            fraction_digits: 2,
            missing_placeholder: "-".to_string(),
        }
    }
}

/// Render an optional price, e.g. `Some(1234.5)` -> `฿1,234.50`.
pub fn format_price(price: Option<f64>, format: &CurrencyFormat) -> String {
    match price {
        Some(amount) if amount.is_finite() => {
            format!("{}{}", format.symbol, format_amount(amount, format))
        }
        _ => format.missing_placeholder.clone(),
    }
}

/// Largest scale a `Decimal` can carry
const MAX_DECIMAL_SCALE: u32 = 28;

/// `amount` rounded to `fraction_digits`, zero-padded, without grouping.
fn round_fixed(amount: f64, fraction_digits: usize) -> String {
    let scale = u32::try_from(fraction_digits)
        .unwrap_or(MAX_DECIMAL_SCALE)
        .min(MAX_DECIMAL_SCALE);
    match Decimal::from_str(&amount.to_string()) {
        Ok(value) => {
            let mut rounded =
                value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(scale);
            rounded.to_string()
        }
        Err(e) => {
            // Out of Decimal range; binary rounding is close enough there
            debug!("Price {amount} not representable as decimal: {e}");
            format!("{:.*}", fraction_digits, amount)
        }
    }
}

fn format_amount(amount: f64, format: &CurrencyFormat) -> String {
    let fixed = round_fixed(amount.abs(), format.fraction_digits);
    let (int_digits, frac_digits) = match fixed.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, Some(frac_digits)),
        None => (fixed.as_str(), None),
    };

    // "-0.00" is not a thing in a price column
    let is_negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::with_capacity(fixed.len() + int_digits.len() / 3 + 1);
    if is_negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_digits, &format.thousands_separator));
    if let Some(frac_digits) = frac_digits {
        out.push_str(&format.decimal_separator);
        out.push_str(frac_digits);
    }
    out
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + (len / 3) * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baht(price: Option<f64>) -> String {
        format_price(price, &CurrencyFormat::default())
    }

    #[test]
    fn test_thousands_and_fixed_decimals() {
        assert_eq!(baht(Some(1234.5)), "฿1,234.50");
        assert_eq!(baht(Some(0.0)), "฿0.00");
        assert_eq!(baht(Some(999.999)), "฿1,000.00");
        assert_eq!(baht(Some(1234567.891)), "฿1,234,567.89");
        assert_eq!(baht(Some(350.0)), "฿350.00");
        // midpoints round away from zero on the written value
        assert_eq!(baht(Some(1.005)), "฿1.01");
        assert_eq!(baht(Some(0.015)), "฿0.02");
        assert_eq!(baht(Some(999999.995)), "฿1,000,000.00");
        assert_eq!(baht(Some(2.675)), "฿2.68");
    }

    #[test]
    fn test_amount_beyond_decimal_range() {
        let digits = format!("{:.0}", 1e30);
        let expected = format!("฿{}.00", group_thousands(&digits, ","));
        assert_eq!(baht(Some(1e30)), expected);
    }

    #[test]
    fn test_missing_price_uses_placeholder() {
        assert_eq!(baht(None), "-");
        assert_eq!(baht(Some(f64::NAN)), "-");
        assert_eq!(baht(Some(f64::INFINITY)), "-");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(baht(Some(-1500.0)), "฿-1,500.00");
        assert_eq!(baht(Some(-0.001)), "฿0.00");
        assert_eq!(baht(Some(-1.005)), "฿-1.01");
    }

    #[test]
    fn test_custom_separators() {
        let format = CurrencyFormat {
            symbol: "€".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            fraction_digits: 2,
            missing_placeholder: "n/a".to_string(),
        };
        assert_eq!(format_price(Some(98765.4), &format), "€98.765,40");
        assert_eq!(format_price(None, &format), "n/a");
    }

    #[test]
    fn test_zero_fraction_digits() {
        let format = CurrencyFormat {
            fraction_digits: 0,
            ..CurrencyFormat::default()
        };
        assert_eq!(format_price(Some(2500.0), &format), "฿2,500");
    }
}
