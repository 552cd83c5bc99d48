//! Exact decimal prices.
//!
//! A [`Price`] keeps the decimal text it was built from and never passes through
//! `f64` on the write path. The only lossy step is [`Price::to_f64`], used when
//! rendering a stored item back to a client.
//!
//! Accepted values follow the DynamoDB number limits: at most 38 significant
//! digits and a magnitude between `1e-130` and `9.99…e125`. Every such value is
//! also a finite `f64`, so anything that can be stored can be rendered.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("price must be a number or a numeric string, got {0}")]
    NotNumeric(String),

    #[error("'{0}' is not a decimal number")]
    InvalidDecimal(String),

    #[error("'{0}' has more than 38 significant digits")]
    TooPrecise(String),

    #[error("'{0}' is outside the supported number range")]
    OutOfRange(String),
}

/// Significant digits a DynamoDB number can hold.
pub const MAX_SIGNIFICANT_DIGITS: usize = 38;

/// Decimal exponent bounds of a non-zero DynamoDB number in scientific form.
const MIN_EXPONENT: i64 = -130;
const MAX_EXPONENT: i64 = 125;

/// Exact decimal quantity, stored as validated decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price(String);

impl Price {
    /// Parse decimal text such as `9.99`, `-3`, `.5` or `1.5e3`.
    ///
    /// Surrounding whitespace and a leading `+` are dropped; the remaining text is
    /// kept verbatim.
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        let trimmed = text.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

        if !is_decimal(unsigned) {
            return Err(PriceError::InvalidDecimal(text.to_string()));
        }
        check_limits(unsigned)?;

        Ok(Self(unsigned.to_string()))
    }

    /// Build a price from a JSON request value.
    ///
    /// Strings must hold decimal text. Numbers are taken through
    /// [`Number::to_string`](serde_json::Number), which is already `f64` text;
    /// callers holding the literal from the request should use [`Price::parse`].
    pub fn from_json(value: &Value) -> Result<Self, PriceError> {
        match value {
            Value::Number(number) => Self::parse(&number.to_string()),
            Value::String(text) => Self::parse(text),
            other => Err(PriceError::NotNumeric(json_type(other).to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Nearest `f64`.
    ///
    /// Decimals with more significant digits than a double can hold come back
    /// rounded (`0.1000000000000000055511` becomes `0.1`). `None` only for text
    /// that bypassed [`Price::parse`].
    pub fn to_f64(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `-?(digits[.digits*] | .digits)([eE][+-]?digits)?`
fn is_decimal(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = all_digits(int_part)
        && all_digits(frac_part)
        && (!int_part.is_empty() || !frac_part.is_empty());

    let exponent_ok = match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    };

    mantissa_ok && exponent_ok
}

/// Enforce the significant-digit and exponent limits on validated decimal text.
fn check_limits(text: &str) -> Result<(), PriceError> {
    let body = text.strip_prefix('-').unwrap_or(text);

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], &body[pos + 1..]),
        None => (body, "0"),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits = format!("{}{}", int_part, frac_part);
    let leading_zeros = digits.bytes().take_while(|b| *b == b'0').count();
    let significant = digits[leading_zeros..].trim_end_matches('0');

    if significant.is_empty() {
        return Ok(());
    }
    if significant.len() > MAX_SIGNIFICANT_DIGITS {
        return Err(PriceError::TooPrecise(text.to_string()));
    }

    let exponent: i64 = exponent
        .parse()
        .map_err(|_| PriceError::OutOfRange(text.to_string()))?;
    let scientific = exponent
        .checked_add(int_part.len() as i64 - leading_zeros as i64 - 1)
        .ok_or_else(|| PriceError::OutOfRange(text.to_string()))?;

    if (MIN_EXPONENT..=MAX_EXPONENT).contains(&scientific) {
        Ok(())
    } else {
        Err(PriceError::OutOfRange(text.to_string()))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_accepts_decimal_forms() {
        for text in ["9.99", "0", "-3", "10.", ".5", "1.5e3", "2E-4", "+7.25"] {
            assert!(Price::parse(text).is_ok(), "{text} should parse");
        }
        assert_eq!(Price::parse("+7.25").unwrap().as_str(), "7.25");
        assert_eq!(Price::parse(" 19.99 ").unwrap().as_str(), "19.99");
    }

    #[test]
    fn test_parse_rejects_non_decimals() {
        for text in ["", "-", ".", "abc", "1.2.3", "1e", "NaN", "inf", "0x10", "1,5"] {
            assert!(
                matches!(Price::parse(text), Err(PriceError::InvalidDecimal(_))),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_json_number_keeps_decimal_text() {
        let price = Price::from_json(&json!(9.99)).unwrap();
        assert_eq!(price.as_str(), "9.99");

        let price = Price::from_json(&json!(42)).unwrap();
        assert_eq!(price.as_str(), "42");
    }

    #[test]
    fn test_from_json_numeric_string_is_kept_verbatim() {
        let price = Price::from_json(&json!("12345678901234567890.123456789")).unwrap();
        assert_eq!(price.as_str(), "12345678901234567890.123456789");
    }

    #[test]
    fn test_from_json_rejects_other_types() {
        assert_eq!(
            Price::from_json(&json!(true)),
            Err(PriceError::NotNumeric("boolean".to_string()))
        );
        assert!(Price::from_json(&json!(null)).is_err());
        assert!(Price::from_json(&json!("cheap")).is_err());
    }

    #[test]
    fn test_to_f64_short_decimals_are_exact() {
        assert_eq!(Price::parse("19.99").unwrap().to_f64(), Some(19.99));
        assert_eq!(Price::parse("10").unwrap().to_f64(), Some(10.0));
    }

    #[test]
    fn test_to_f64_rounds_long_decimals() {
        let price = Price::parse("0.1000000000000000055511151231257827").unwrap();
        assert_eq!(price.to_f64(), Some(0.1));
    }

    #[test]
    fn test_parse_accepts_values_at_the_limits() {
        for text in [
            "99999999999999999999999999999999999999",
            "0.00000000000000000000000000000000000000000000000000012345678901234567890123456789012345678",
            "9.9999999999999999999999999999999999999e125",
            "-9.9999999999999999999999999999999999999E+125",
            "1e-130",
            "10e-131",
            "-0.000",
            "100000000000000000000000000000000000000000",
        ] {
            let price = Price::parse(text).unwrap_or_else(|e| panic!("{text}: {e}"));
            assert!(price.to_f64().is_some(), "{text} should render");
        }
    }

    #[test]
    fn test_parse_rejects_too_many_significant_digits() {
        for text in [
            "123456789012345678901234567890123456789",
            "1.23456789012345678901234567890123456789",
            "0.000123456789012345678901234567890123456789",
        ] {
            assert!(
                matches!(Price::parse(text), Err(PriceError::TooPrecise(_))),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_magnitudes() {
        for text in ["1e400", "1e126", "-1e126", "1e-131", "0.1e-130", "1e99999999999999999999"] {
            assert!(
                matches!(Price::parse(text), Err(PriceError::OutOfRange(_))),
                "{text} should be rejected"
            );
        }
    }
}
