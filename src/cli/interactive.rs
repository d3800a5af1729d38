//! Line oriented session that keeps a form and redraws the result after every edit.

use super::{convert, list, ui};
use crate::core::{ConversionForm, NameTable, RateTable};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  amount <value>   set the amount to convert
  from <code>      set the source currency
  to <code>        set the target currency
  swap             swap source and target
  list             show available currencies
  help             show this help
  quit             leave the session";

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Amount(&'a str),
    From(String),
    To(String),
    Swap,
    List,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let (word, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, a)| (w, a.trim()));

    match word.to_lowercase().as_str() {
        "amount" | "a" => Command::Amount(arg),
        "from" | "f" if !arg.is_empty() => Command::From(arg.to_uppercase()),
        "to" | "t" if !arg.is_empty() => Command::To(arg.to_uppercase()),
        "swap" | "s" => Command::Swap,
        "list" | "l" => Command::List,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line),
    }
}

fn prompt<W: Write>(form: &ConversionForm, out: &mut W) -> Result<()> {
    write!(
        out,
        "{} ",
        ui::style_text(
            &format!("[{} {} -> {}]>", form.amount(), form.source(), form.target()),
            ui::StyleType::Subtle
        )
    )?;
    out.flush()?;
    Ok(())
}

/// Runs the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut form: ConversionForm,
    rates: &dyn RateTable,
    names: &NameTable,
    pinned: &str,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "{}\n{}\n",
        ui::style_text("Currency Converter", ui::StyleType::Title),
        ui::style_text("Type `help` for commands.", ui::StyleType::Subtle)
    )?;
    writeln!(out, "{}\n", convert::render_result(&form.evaluate(rates)))?;
    prompt(&form, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&form, out)?;
            continue;
        }

        let command = parse_command(&line);
        debug!(?command, "Session command");
        match command {
            Command::Amount(amount) => form.set_amount(amount),
            Command::From(code) => form.set_source(&code),
            Command::To(code) => form.set_target(&code),
            Command::Swap => form.swap(),
            Command::List => {
                list::run(rates, names, pinned, out)?;
                prompt(&form, out)?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                prompt(&form, out)?;
                continue;
            }
            Command::Quit => break,
            Command::Unknown(text) => {
                writeln!(
                    out,
                    "{}",
                    ui::style_text(&format!("Unknown command: {text}"), ui::StyleType::Error)
                )?;
                prompt(&form, out)?;
                continue;
            }
        }

        writeln!(out, "{}\n", convert::render_result(&form.evaluate(rates)))?;
        prompt(&form, out)?;
    }

    writeln!(out)?;
    Ok(())
}
