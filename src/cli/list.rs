use super::ui;
use crate::core::{CurrencyOption, NameTable, RateTable, currency_options};
use anyhow::Result;
use comfy_table::Cell;
use std::io::Write;

/// Builds the table of selectable currencies with their rate against the reference.
pub fn display_options(options: &[CurrencyOption], reference: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Per 1 {reference}")),
    ]);

    for (index, option) in options.iter().enumerate() {
        let label = if index == 0 {
            ui::highlight_cell(&option.label)
        } else {
            Cell::new(&option.label)
        };
        table.add_row(vec![label, ui::number_cell(format!("{:.4}", option.rate))]);
    }

    table.to_string()
}

pub fn run<W: Write>(
    rates: &dyn RateTable,
    names: &NameTable,
    pinned: &str,
    out: &mut W,
) -> Result<()> {
    let options = currency_options(rates, names, Some(pinned));
    writeln!(
        out,
        "{}\n\n{}",
        ui::style_text("Currencies", ui::StyleType::Title),
        display_options(&options, rates.reference())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StaticRateTable;

    #[test]
    fn test_list_shows_pinned_first() -> Result<()> {
        let rates = StaticRateTable::builtin();
        let names = NameTable::builtin();
        let mut out = Vec::new();
        run(&rates, &names, "INR", &mut out)?;

        let text = console::strip_ansi_codes(&String::from_utf8(out)?).to_string();
        assert!(text.contains("Per 1 USD"));
        assert!(text.contains("INR - Indian Rupee"));
        assert!(text.contains("83.4500"));

        let inr = text.find("Indian Rupee").unwrap();
        let usd = text.find("United States Dollar").unwrap();
        assert!(inr < usd);
        Ok(())
    }

    #[test]
    fn test_table_renders_option_labels() {
        let options = vec![
            CurrencyOption {
                code: "XAU".to_string(),
                label: "XAU - Gold".to_string(),
                rate: 0.0005,
            },
            CurrencyOption {
                code: "EUR".to_string(),
                label: "EUR - Euro".to_string(),
                rate: 1.0,
            },
        ];

        let text = console::strip_ansi_codes(&display_options(&options, "EUR")).to_string();
        assert!(text.contains("Per 1 EUR"));
        assert!(text.contains("XAU - Gold"));
        assert!(text.contains("0.0005"));
        assert!(text.find("XAU - Gold").unwrap() < text.find("EUR - Euro").unwrap());
    }
}
