use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use xcv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for xcv::AppCommand {
    fn from(cmd: Commands) -> xcv::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                json,
            } => xcv::AppCommand::Convert {
                amount,
                from,
                to,
                json,
            },
            Commands::List => xcv::AppCommand::List,
            Commands::Interactive => xcv::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,

        /// Currency to convert from, e.g. INR
        #[arg(short, long)]
        from: Option<String>,

        /// Currency to convert to, e.g. USD
        #[arg(short, long)]
        to: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available currencies and their rates
    List,
    /// Edit amount and currencies in a session, converting after every change
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => xcv::cli::setup::setup(),
        Some(cmd) => xcv::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
