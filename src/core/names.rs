//! Display names for currency codes.

use std::collections::HashMap;

pub const BUILTIN_NAMES: &[(&str, &str)] = &[
    ("USD", "United States Dollar"),
    ("EUR", "Euro"),
    ("INR", "Indian Rupee"),
    ("JPY", "Japanese Yen"),
    ("GBP", "British Pound"),
    ("AUD", "Australian Dollar"),
    ("CAD", "Canadian Dollar"),
    ("CHF", "Swiss Franc"),
    ("CNY", "Chinese Yuan"),
    ("SEK", "Swedish Krona"),
    ("NZD", "New Zealand Dollar"),
    ("SGD", "Singapore Dollar"),
    ("HKD", "Hong Kong Dollar"),
    ("KRW", "South Korean Won"),
    ("MXN", "Mexican Peso"),
    ("BRL", "Brazilian Real"),
    ("RUB", "Russian Ruble"),
    ("ZAR", "South African Rand"),
    ("TRY", "Turkish Lira"),
    ("SAR", "Saudi Riyal"),
    ("AED", "UAE Dirham"),
    ("THB", "Thai Baht"),
    ("IDR", "Indonesian Rupiah"),
    ("PHP", "Philippine Peso"),
    ("VND", "Vietnamese Dong"),
    ("MYR", "Malaysian Ringgit"),
    ("PLN", "Polish Zloty"),
    ("NOK", "Norwegian Krone"),
    ("DKK", "Danish Krone"),
    ("EGP", "Egyptian Pound"),
    ("CLP", "Chilean Peso"),
    ("ARS", "Argentine Peso"),
    ("COP", "Colombian Peso"),
    ("PKR", "Pakistani Rupee"),
    ("BDT", "Bangladeshi Taka"),
    ("NPR", "Nepalese Rupee"),
    ("LKR", "Sri Lankan Rupee"),
    ("KZT", "Kazakhstani Tenge"),
    ("UAH", "Ukrainian Hryvnia"),
    ("CZK", "Czech Koruna"),
    ("HUF", "Hungarian Forint"),
    ("ILS", "Israeli New Shekel"),
    ("QAR", "Qatari Riyal"),
    ("KWD", "Kuwaiti Dinar"),
    ("BHD", "Bahraini Dinar"),
    ("OMR", "Omani Rial"),
    ("JOD", "Jordanian Dinar"),
    ("LBP", "Lebanese Pound"),
];

/// Maps currency codes to human readable names. Purely cosmetic.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: HashMap<String, String>,
}

impl NameTable {
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NAMES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }

    /// Adds or replaces names, e.g. from a configured rate table.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.names.extend(
            overrides
                .into_iter()
                .map(|(code, name)| (code.into(), name.into())),
        );
        self
    }

    /// Name for `code`, or the code itself when no name is known.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map_or(code, String::as_str)
    }

    /// Label used when listing a currency as a choice, e.g. "INR - Indian Rupee".
    pub fn option_label(&self, code: &str) -> String {
        format!("{code} - {}", self.display_name(code))
    }
}
