//! Currency rate abstractions

/// A source of exchange rates expressed against a single reference currency.
///
/// Every rate is the number of units of a currency that equal one unit of the
/// reference currency, so the reference itself always maps to `1.0`.
pub trait RateTable {
    /// Code of the reference currency.
    fn reference(&self) -> &str;

    /// Units of `code` per one reference unit, if the code is known.
    fn rate(&self, code: &str) -> Option<f64>;

    /// All known codes in table order.
    fn codes(&self) -> Vec<&str>;

    fn contains(&self, code: &str) -> bool {
        self.rate(code).is_some()
    }
}
