//! Core conversion logic and its supporting tables

pub mod config;
pub mod converter;
pub mod currency;
pub mod form;
pub mod log;
pub mod names;
pub mod rates;

// Re-export main types for cleaner imports
pub use converter::{AmountInput, ConversionResult, ConversionStatus, NoticeKind, convert};
pub use currency::RateTable;
pub use form::{ConversionForm, CurrencyOption, currency_options};
pub use names::NameTable;
pub use rates::StaticRateTable;
