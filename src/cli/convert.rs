use super::ui;
use crate::core::{ConversionForm, ConversionResult, RateTable};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// Renders a result the way the converter card shows it: the amount, the unit
/// rate line and the notice for its status.
pub fn render_result(result: &ConversionResult) -> String {
    let mut output = format!(
        "{}\n{}\n",
        ui::style_text("Converted Amount:", ui::StyleType::Label),
        ui::style_text(&result.converted_amount, ui::StyleType::Result)
    );

    if !result.unit_rate.is_empty() {
        output.push_str(&ui::style_text(&result.unit_rate, ui::StyleType::Subtle));
        output.push('\n');
    }

    output.push_str(&ui::style_notice(
        result.status.notice(),
        result.status.notice_kind(),
    ));
    output
}

pub fn run<W: Write>(
    form: &ConversionForm,
    rates: &dyn RateTable,
    json: bool,
    out: &mut W,
) -> Result<()> {
    debug!(
        amount = form.amount(),
        source = form.source(),
        target = form.target(),
        "Converting"
    );
    let result = form.evaluate(rates);

    if json {
        let text =
            serde_json::to_string_pretty(&result).context("Failed to serialize conversion result")?;
        writeln!(out, "{text}")?;
    } else {
        writeln!(out, "{}", render_result(&result))?;
    }
    Ok(())
}
