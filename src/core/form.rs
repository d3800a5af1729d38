//! The current inputs of a conversion, re-evaluated after every edit.

use crate::core::converter::{ConversionResult, convert};
use crate::core::currency::RateTable;
use crate::core::names::NameTable;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_AMOUNT: &str = "1";
pub const DEFAULT_SOURCE: &str = "INR";
pub const DEFAULT_TARGET: &str = "USD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionForm {
    amount: String,
    source: String,
    target: String,
}

impl Default for ConversionForm {
    fn default() -> Self {
        Self::new(DEFAULT_AMOUNT, DEFAULT_SOURCE, DEFAULT_TARGET)
    }
}

impl ConversionForm {
    pub fn new(amount: &str, source: &str, target: &str) -> Self {
        Self {
            amount: amount.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn set_amount(&mut self, amount: &str) {
        debug!(amount, "Amount changed");
        self.amount = amount.to_string();
    }

    pub fn set_source(&mut self, code: &str) {
        debug!(code, "Source currency changed");
        self.source = code.to_string();
    }

    pub fn set_target(&mut self, code: &str) {
        debug!(code, "Target currency changed");
        self.target = code.to_string();
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
        debug!(source = %self.source, target = %self.target, "Swapped currencies");
    }

    /// Derives the result from the current inputs.
    pub fn evaluate(&self, rates: &dyn RateTable) -> ConversionResult {
        convert(&self.amount, &self.source, &self.target, rates)
    }
}

/// A selectable currency, as listed to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyOption {
    pub code: String,
    pub label: String,
    pub rate: f64,
}

/// Lists the currencies of `rates` with `pinned` first, the rest in table order.
///
/// A pinned code missing from the table is ignored.
pub fn currency_options(
    rates: &dyn RateTable,
    names: &NameTable,
    pinned: Option<&str>,
) -> Vec<CurrencyOption> {
    let codes = rates.codes();
    let pinned = pinned.filter(|code| rates.contains(code));

    pinned
        .into_iter()
        .chain(codes.into_iter().filter(|code| Some(*code) != pinned))
        .filter_map(|code| {
            rates.rate(code).map(|rate| CurrencyOption {
                code: code.to_string(),
                label: names.option_label(code),
                rate,
            })
        })
        .collect()
}
