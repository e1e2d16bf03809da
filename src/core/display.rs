//! Display text and number formatting.
//!
//! The display holds text rather than a number so that the digits a user
//! types are preserved exactly until a computation normalizes them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown when a computation produced a non-finite or undefined value.
pub const ERROR_SENTINEL: &str = "Error";

/// The single value currently shown on the calculator.
///
/// Always either a decimal string (possibly mid-entry, such as `"12."`) or
/// the [`ERROR_SENTINEL`].
///
/// # Example
///
/// ```rust
/// use scicalc::core::DisplayValue;
///
/// let display = DisplayValue::from_number(0.1 + 0.2);
/// assert_eq!(display.as_str(), "0.30000000000000004");
///
/// let display = DisplayValue::from_number(f64::INFINITY);
/// assert!(display.is_error());
/// assert!(display.to_number().is_nan());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayValue(String);

impl Default for DisplayValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl DisplayValue {
    /// The initial display, `"0"`.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// The error sentinel display.
    pub fn error() -> Self {
        Self(ERROR_SENTINEL.to_string())
    }

    /// Normalize a computed number, substituting the sentinel for NaN and
    /// infinities.
    pub fn from_number(value: f64) -> Self {
        if value.is_finite() {
            Self(format_number(value))
        } else {
            Self::error()
        }
    }

    pub(crate) fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Whether the sentinel is showing.
    pub fn is_error(&self) -> bool {
        self.0 == ERROR_SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    pub(crate) fn push(&mut self, c: char) {
        self.0.push(c);
    }

    /// Parse the display as an operand. See [`parse_leading_number`].
    pub fn to_number(&self) -> f64 {
        parse_leading_number(&self.0)
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format a number the way the calculator shows it.
///
/// Finite values print as the shortest decimal that round-trips, with
/// exponent notation (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`. Negative
/// zero prints as `0`. Non-finite values print as `NaN`, `Infinity` or
/// `-Infinity`.
///
/// ```rust
/// use scicalc::core::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(0.00000015), "1.5e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with at most one decimal point, an
/// optional exponent and the word `Infinity`. Trailing garbage is ignored
/// (`"1.2.3"` parses as `1.2`). Returns NaN when no prefix is numeric,
/// including for the error sentinel.
///
/// ```rust
/// use scicalc::core::parse_leading_number;
///
/// assert_eq!(parse_leading_number("12."), 12.0);
/// assert_eq!(parse_leading_number("1.2.3"), 1.2);
/// assert!(parse_leading_number("Error").is_nan());
/// ```
pub fn parse_leading_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        let infinity = f64::INFINITY;
        return if text.starts_with('-') { -infinity } else { infinity };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default() {
        assert_eq!(DisplayValue::default().as_str(), "0");
        assert!(!DisplayValue::default().is_error());
    }

    #[test]
    fn from_number_substitutes_sentinel() {
        assert!(DisplayValue::from_number(f64::NAN).is_error());
        assert!(DisplayValue::from_number(f64::NEG_INFINITY).is_error());
        assert_eq!(DisplayValue::from_number(120.0).as_str(), "120");
    }

    #[test]
    fn format_number_matches_calculator_output() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(3.141592653589793), "3.141592653589793");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(2.5e-8), "2.5e-8");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn parse_accepts_entry_forms() {
        assert_eq!(parse_leading_number("0"), 0.0);
        assert_eq!(parse_leading_number("42"), 42.0);
        assert_eq!(parse_leading_number("-3"), -3.0);
        assert_eq!(parse_leading_number("12."), 12.0);
        assert_eq!(parse_leading_number(".5"), 0.5);
        assert_eq!(parse_leading_number("1e+21"), 1e21);
        assert_eq!(parse_leading_number("2.5e-8"), 2.5e-8);
        assert_eq!(parse_leading_number("  7"), 7.0);
    }

    #[test]
    fn parse_stops_at_first_invalid_character() {
        assert_eq!(parse_leading_number("1.2.3"), 1.2);
        assert_eq!(parse_leading_number("3e"), 3.0);
        assert_eq!(parse_leading_number("9abc"), 9.0);
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert!(parse_leading_number("Error").is_nan());
        assert!(parse_leading_number(".").is_nan());
        assert!(parse_leading_number("-").is_nan());
        assert!(parse_leading_number("").is_nan());
    }

    #[test]
    fn parse_handles_infinity() {
        assert_eq!(parse_leading_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_leading_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn contains_decimal_point_checks_text() {
        assert!(DisplayValue::from_text("1.5").contains_decimal_point());
        assert!(!DisplayValue::zero().contains_decimal_point());
    }
}
