//! Static exchange rate table.

use crate::core::currency::RateTable;
use anyhow::{Result, bail};
use std::collections::HashSet;
use tracing::debug;

/// Reference currency of the built-in table.
pub const BUILTIN_REFERENCE: &str = "USD";

/// Illustrative rates against USD. Not live data.
pub const BUILTIN_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("INR", 83.45),
    ("JPY", 157.00),
    ("GBP", 0.79),
    ("AUD", 1.50),
    ("CAD", 1.36),
    ("CHF", 0.90),
    ("CNY", 7.26),
    ("SEK", 10.50),
    ("NZD", 1.63),
    ("SGD", 1.35),
    ("HKD", 7.82),
    ("KRW", 1380.00),
    ("MXN", 18.00),
    ("BRL", 5.00),
    ("RUB", 90.00),
    ("ZAR", 18.50),
    ("TRY", 32.00),
    ("SAR", 3.75),
    ("AED", 3.67),
    ("THB", 36.00),
    ("IDR", 16200.00),
    ("PHP", 58.00),
    ("VND", 25400.00),
    ("MYR", 4.70),
    ("PLN", 4.00),
    ("NOK", 10.80),
    ("DKK", 6.80),
    ("EGP", 47.00),
    ("CLP", 950.00),
    ("ARS", 900.00),
    ("COP", 4100.00),
    ("PKR", 278.00),
    ("BDT", 110.00),
    ("NPR", 133.00),
    ("LKR", 300.00),
    ("KZT", 460.00),
    ("UAH", 40.00),
    ("CZK", 23.00),
    ("HUF", 360.00),
    ("ILS", 3.70),
    ("QAR", 3.64),
    ("KWD", 0.30),
    ("BHD", 0.37),
    ("OMR", 0.38),
    ("JOD", 0.71),
    ("LBP", 15000.00),
];

/// An immutable rate table kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticRateTable {
    reference: String,
    entries: Vec<(String, f64)>,
}

impl StaticRateTable {
    /// Builds a validated table.
    ///
    /// Fails when the table is empty, a code is not an uppercase identifier or
    /// repeats, a rate is not a positive finite number, or the reference entry
    /// is missing or differs from `1.0`.
    pub fn new<I, S>(reference: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let entries: Vec<(String, f64)> = entries
            .into_iter()
            .map(|(code, rate)| (code.into(), rate))
            .collect();

        if entries.is_empty() {
            bail!("Rate table has no currencies");
        }

        let mut seen = HashSet::new();
        for (code, rate) in &entries {
            if !is_currency_code(code) {
                bail!("Invalid currency code in rate table: {code:?}");
            }
            if !seen.insert(code.as_str()) {
                bail!("Duplicate currency in rate table: {code}");
            }
            if !rate.is_finite() || *rate <= 0.0 {
                bail!("Invalid rate for {code}: {rate}");
            }
        }

        match entries.iter().find(|(code, _)| code == reference) {
            None => bail!("Reference currency {reference} is missing from the rate table"),
            Some((_, rate)) if *rate != 1.0 => {
                bail!("Reference currency {reference} must have a rate of 1.0, found {rate}")
            }
            Some(_) => {}
        }

        debug!(reference, count = entries.len(), "Built rate table");
        Ok(Self {
            reference: reference.to_string(),
            entries,
        })
    }

    pub fn builtin() -> Self {
        Self {
            reference: BUILTIN_REFERENCE.to_string(),
            entries: BUILTIN_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }
}

/// Codes are non-empty and made of ASCII uppercase letters and digits, the
/// form user input is normalised to before lookup.
pub fn is_currency_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

impl RateTable for StaticRateTable {
    fn reference(&self) -> &str {
        &self.reference
    }

    fn rate(&self, code: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, rate)| *rate)
    }

    fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|(code, _)| code.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let builtin = StaticRateTable::builtin();
        let validated = StaticRateTable::new(BUILTIN_REFERENCE, BUILTIN_RATES.iter().copied())
            .expect("Built-in table should validate");

        assert_eq!(builtin, validated);
        assert_eq!(builtin.codes().len(), 48);
        assert_eq!(builtin.reference(), "USD");
        assert_eq!(builtin.rate("USD"), Some(1.0));
        assert_eq!(builtin.rate("INR"), Some(83.45));
        assert_eq!(builtin.rate("XYZ"), None);
        assert!(builtin.contains("LBP"));
        assert!(!builtin.contains("usd"));
    }

    #[test]
    fn test_codes_keep_table_order() {
        let table = StaticRateTable::builtin();
        let codes = table.codes();
        assert_eq!(&codes[..3], &["USD", "EUR", "INR"]);
        assert_eq!(codes.last(), Some(&"LBP"));
    }

    #[test]
    fn test_rejects_invalid_tables() {
        let empty: Vec<(&str, f64)> = vec![];
        assert!(StaticRateTable::new("USD", empty).is_err());

        let missing_reference = StaticRateTable::new("USD", vec![("EUR", 0.92)]);
        assert!(
            missing_reference
                .unwrap_err()
                .to_string()
                .contains("missing")
        );

        let bad_reference = StaticRateTable::new("USD", vec![("USD", 2.0), ("EUR", 0.92)]);
        assert!(bad_reference.unwrap_err().to_string().contains("1.0"));

        let negative = StaticRateTable::new("USD", vec![("USD", 1.0), ("EUR", -0.92)]);
        assert!(negative.unwrap_err().to_string().contains("Invalid rate"));

        let zero = StaticRateTable::new("USD", vec![("USD", 1.0), ("EUR", 0.0)]);
        assert!(zero.is_err());

        let nan = StaticRateTable::new("USD", vec![("USD", 1.0), ("EUR", f64::NAN)]);
        assert!(nan.is_err());

        let duplicate = StaticRateTable::new("USD", vec![("USD", 1.0), ("USD", 1.0)]);
        assert!(duplicate.unwrap_err().to_string().contains("Duplicate"));
    }

    #[test]
    fn test_rejects_codes_the_cli_cannot_reach() {
        let lowercase = StaticRateTable::new("USD", vec![("USD", 1.0), ("eur", 0.92)]);
        assert!(
            lowercase
                .unwrap_err()
                .to_string()
                .contains("Invalid currency code")
        );

        let mixed_case_pair =
            StaticRateTable::new("USD", vec![("USD", 1.0), ("EUR", 0.92), ("Eur", 0.92)]);
        assert!(mixed_case_pair.is_err());

        let empty_code = StaticRateTable::new("USD", vec![("USD", 1.0), ("", 0.92)]);
        assert!(empty_code.is_err());

        let spaced = StaticRateTable::new("USD", vec![("USD", 1.0), ("E UR", 0.92)]);
        assert!(spaced.is_err());

        assert!(is_currency_code("XAU"));
        assert!(is_currency_code("USDT2"));
        assert!(!is_currency_code("usd"));
    }

    #[test]
    fn test_custom_reference() {
        let table = StaticRateTable::new("EUR", vec![("EUR", 1.0), ("USD", 1.087)])
            .expect("Valid table");
        assert_eq!(table.reference(), "EUR");
        assert_eq!(table.rate("USD"), Some(1.087));
        assert_eq!(table.codes(), vec!["EUR", "USD"]);
    }
}
