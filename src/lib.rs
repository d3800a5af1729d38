pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Convert once. Missing fields fall back to the configured defaults.
    Convert {
        amount: Option<String>,
        from: Option<String>,
        to: Option<String>,
        json: bool,
    },
    List,
    Interactive,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_command_with_io(command, config_path, stdin.lock(), &mut stdout)
}

pub fn run_command_with_io<R: BufRead, W: Write>(
    command: AppCommand,
    config_path: Option<&str>,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let rates = config.rate_table()?;
    let names = config.name_table();

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            json,
        } => {
            let mut form = config.initial_form();
            if let Some(amount) = amount {
                form.set_amount(&amount);
            }
            if let Some(code) = from {
                form.set_source(&code.to_uppercase());
            }
            if let Some(code) = to {
                form.set_target(&code.to_uppercase());
            }
            cli::convert::run(&form, &rates, json, out)
        }
        AppCommand::List => cli::list::run(&rates, &names, &config.pinned(), out),
        AppCommand::Interactive => cli::interactive::run(
            config.initial_form(),
            &rates,
            &names,
            &config.pinned(),
            input,
            out,
        ),
    }
}
