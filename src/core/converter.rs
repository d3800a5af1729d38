//! Converts an amount between two currencies of a rate table.
//!
//! Every input, however malformed, produces a [`ConversionResult`]. Invalid
//! amounts and unknown currencies are reported through [`ConversionStatus`]
//! instead of errors, since they are expected user input states.

use crate::core::currency::RateTable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

/// Unit rate text shown when source and target are the same currency.
pub const SAME_CURRENCY_INFO: &str = "Same currency selected.";

/// An amount as the user supplied it, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountInput<'a> {
    Text(&'a str),
    Number(f64),
}

impl AmountInput<'_> {
    /// Returns the amount if it is a finite number greater than zero.
    pub fn parse_positive(&self) -> Option<f64> {
        let value = match self {
            AmountInput::Text(text) => text.trim().parse::<f64>().ok()?,
            AmountInput::Number(value) => *value,
        };
        (value.is_finite() && value > 0.0).then_some(value)
    }
}

impl<'a> From<&'a str> for AmountInput<'a> {
    fn from(text: &'a str) -> Self {
        AmountInput::Text(text)
    }
}

impl<'a> From<&'a String> for AmountInput<'a> {
    fn from(text: &'a String) -> Self {
        AmountInput::Text(text)
    }
}

impl From<f64> for AmountInput<'_> {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<i32> for AmountInput<'_> {
    fn from(value: i32) -> Self {
        AmountInput::Number(f64::from(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionStatus {
    Ok,
    SameCurrency,
    InvalidAmount,
    UnknownCurrency,
}

/// How a notice should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl ConversionStatus {
    pub fn notice(&self) -> &'static str {
        match self {
            ConversionStatus::Ok => "Conversion successful!",
            ConversionStatus::SameCurrency => {
                "Converting to the same currency. No exchange needed."
            }
            ConversionStatus::InvalidAmount => "Please enter a valid positive amount.",
            ConversionStatus::UnknownCurrency => {
                "Exchange rate data not available for selected currencies."
            }
        }
    }

    pub fn notice_kind(&self) -> NoticeKind {
        match self {
            ConversionStatus::Ok => NoticeKind::Success,
            ConversionStatus::SameCurrency => NoticeKind::Info,
            ConversionStatus::InvalidAmount | ConversionStatus::UnknownCurrency => {
                NoticeKind::Error
            }
        }
    }
}

impl Display for ConversionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ConversionStatus::Ok => "ok",
                ConversionStatus::SameCurrency => "same-currency",
                ConversionStatus::InvalidAmount => "invalid-amount",
                ConversionStatus::UnknownCurrency => "unknown-currency",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted value to 2 decimals followed by the target code, e.g. "1.20 USD".
    pub converted_amount: String,
    /// "1 INR = 0.0120 USD" on success, empty when the conversion failed.
    pub unit_rate: String,
    pub status: ConversionStatus,
}

impl ConversionResult {
    fn failed(target: &str, status: ConversionStatus) -> Self {
        Self {
            converted_amount: format!("0.00 {target}"),
            unit_rate: String::new(),
            status,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ConversionStatus::Ok
    }
}

/// Converts `amount` of `source` into `target` through the reference currency.
///
/// Checks run in a fixed order and the first match wins: invalid amount,
/// same currency, unknown currency, then the actual conversion. A converted
/// value too large to represent is reported as an invalid amount.
pub fn convert<'a>(
    amount: impl Into<AmountInput<'a>>,
    source: &str,
    target: &str,
    rates: &dyn RateTable,
) -> ConversionResult {
    let amount = amount.into();

    let Some(value) = amount.parse_positive() else {
        debug!(?amount, "Rejected amount");
        return ConversionResult::failed(target, ConversionStatus::InvalidAmount);
    };

    if source == target {
        return ConversionResult {
            converted_amount: format!("{value:.2} {target}"),
            unit_rate: SAME_CURRENCY_INFO.to_string(),
            status: ConversionStatus::SameCurrency,
        };
    }

    let (Some(source_rate), Some(target_rate)) = (rates.rate(source), rates.rate(target)) else {
        debug!(source, target, "No rate for currency pair");
        return ConversionResult::failed(target, ConversionStatus::UnknownCurrency);
    };

    let in_reference = value / source_rate;
    let converted = in_reference * target_rate;
    if !converted.is_finite() {
        debug!(value, source, target, "Converted amount out of range");
        return ConversionResult::failed(target, ConversionStatus::InvalidAmount);
    }
    let unit_rate = target_rate / source_rate;
    debug!(value, source, target, converted, unit_rate, "Converted amount");

    ConversionResult {
        converted_amount: format!("{converted:.2} {target}"),
        unit_rate: format!("1 {source} = {unit_rate:.4} {target}"),
        status: ConversionStatus::Ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::StaticRateTable;

    fn sample_rates() -> StaticRateTable {
        StaticRateTable::new("USD", vec![("USD", 1.0), ("INR", 83.45), ("EUR", 0.92)])
            .expect("Valid table")
    }

    fn numeric_part(converted_amount: &str) -> f64 {
        converted_amount
            .split_whitespace()
            .next()
            .and_then(|v| v.parse().ok())
            .expect("Converted amount should start with a number")
    }

    #[test]
    fn test_convert_inr_to_usd() {
        let result = convert(100, "INR", "USD", &sample_rates());
        assert_eq!(result.converted_amount, "1.20 USD");
        assert_eq!(result.unit_rate, "1 INR = 0.0120 USD");
        assert_eq!(result.status, ConversionStatus::Ok);
        assert!(result.is_ok());
    }

    #[test]
    fn test_convert_text_amount() {
        let result = convert(" 250 ", "USD", "INR", &sample_rates());
        assert_eq!(result.converted_amount, "20862.50 INR");
        assert_eq!(result.unit_rate, "1 USD = 83.4500 INR");
        assert_eq!(result.status, ConversionStatus::Ok);
    }

    #[test]
    fn test_same_currency() {
        let result = convert(50, "EUR", "EUR", &sample_rates());
        assert_eq!(result.converted_amount, "50.00 EUR");
        assert_eq!(result.unit_rate, SAME_CURRENCY_INFO);
        assert_eq!(result.status, ConversionStatus::SameCurrency);

        // Checked before the rate lookup.
        let unknown = convert(5, "XYZ", "XYZ", &sample_rates());
        assert_eq!(unknown.status, ConversionStatus::SameCurrency);
        assert_eq!(unknown.converted_amount, "5.00 XYZ");
    }

    #[test]
    fn test_same_currency_for_every_builtin_code() {
        let rates = StaticRateTable::builtin();
        for code in rates.codes() {
            for amount in [0.01, 1.0, 12.345, 99999.999] {
                let result = convert(amount, code, code, &rates);
                assert_eq!(result.status, ConversionStatus::SameCurrency);
                assert_eq!(result.converted_amount, format!("{amount:.2} {code}"));
            }
        }
    }

    #[test]
    fn test_invalid_amounts() {
        let rates = sample_rates();
        for amount in ["abc", "-5", "0", "", "   ", "NaN", "inf", "1,000"] {
            for (source, target) in [("USD", "EUR"), ("EUR", "EUR"), ("XYZ", "USD")] {
                let result = convert(amount, source, target, &rates);
                assert_eq!(
                    result.status,
                    ConversionStatus::InvalidAmount,
                    "amount {amount:?} from {source} to {target}"
                );
                assert_eq!(result.converted_amount, format!("0.00 {target}"));
                assert!(result.unit_rate.is_empty());
            }
        }

        let result = convert(-10, "USD", "EUR", &rates);
        assert_eq!(result.converted_amount, "0.00 EUR");
        assert_eq!(result.status, ConversionStatus::InvalidAmount);

        assert_eq!(
            convert(f64::NAN, "USD", "EUR", &rates).status,
            ConversionStatus::InvalidAmount
        );
        assert_eq!(
            convert(f64::INFINITY, "USD", "EUR", &rates).status,
            ConversionStatus::InvalidAmount
        );
    }

    #[test]
    fn test_overflowing_conversion_is_invalid_amount() {
        let rates = StaticRateTable::builtin();
        let result = convert("1e308", "KWD", "LBP", &rates);
        assert_eq!(result.status, ConversionStatus::InvalidAmount);
        assert_eq!(result.converted_amount, "0.00 LBP");
        assert!(result.unit_rate.is_empty());

        // The same amount in the other direction stays representable.
        assert!(convert("1e308", "LBP", "KWD", &rates).is_ok());
    }

    #[test]
    fn test_unknown_currency() {
        let rates = sample_rates();
        for (source, target) in [("XYZ", "USD"), ("USD", "XYZ"), ("XYZ", "ABC"), ("usd", "EUR")] {
            let result = convert(10, source, target, &rates);
            assert_eq!(result.status, ConversionStatus::UnknownCurrency);
            assert_eq!(result.converted_amount, format!("0.00 {target}"));
            assert!(result.unit_rate.is_empty());
        }
    }

    #[test]
    fn test_round_trip_within_rounding_tolerance() {
        let rates = StaticRateTable::builtin();
        let codes = rates.codes();
        let amount = 1234.56;

        for source in &codes {
            for target in &codes {
                if source == target {
                    continue;
                }
                let there = convert(amount, source, target, &rates);
                assert!(there.is_ok());
                let intermediate = numeric_part(&there.converted_amount);
                if intermediate == 0.0 {
                    // Rounded away entirely, nothing to convert back.
                    continue;
                }
                let back = convert(intermediate, target, source, &rates);
                assert!(back.is_ok());

                let source_rate = rates.rate(source).unwrap();
                let target_rate = rates.rate(target).unwrap();
                let tolerance = 0.005 * source_rate / target_rate + 0.005 + 1e-9;
                let returned = numeric_part(&back.converted_amount);
                assert!(
                    (returned - amount).abs() <= tolerance,
                    "{source} -> {target} -> {source}: {returned} vs {amount}"
                );
            }
        }
    }

    #[test]
    fn test_convert_is_idempotent() {
        let rates = StaticRateTable::builtin();
        let first = convert("42.42", "GBP", "JPY", &rates);
        let second = convert("42.42", "GBP", "JPY", &rates);
        assert_eq!(first, second);
    }

    #[test]
    fn test_notices() {
        assert_eq!(ConversionStatus::Ok.notice(), "Conversion successful!");
        assert_eq!(ConversionStatus::Ok.notice_kind(), NoticeKind::Success);
        assert_eq!(
            ConversionStatus::SameCurrency.notice_kind(),
            NoticeKind::Info
        );
        assert_eq!(
            ConversionStatus::InvalidAmount.notice(),
            "Please enter a valid positive amount."
        );
        assert_eq!(
            ConversionStatus::UnknownCurrency.notice_kind(),
            NoticeKind::Error
        );
    }

    #[test]
    fn test_result_serializes_status_in_kebab_case() {
        let result = convert(1, "INR", "XYZ", &sample_rates());
        let json = serde_json::to_value(&result).expect("Serializable");
        assert_eq!(json["status"], "unknown-currency");
        assert_eq!(json["converted_amount"], "0.00 XYZ");
        assert_eq!(ConversionStatus::SameCurrency.to_string(), "same-currency");
    }
}
