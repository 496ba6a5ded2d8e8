mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod shell;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use smarket_core::{Market, MarketConfig, SystemClock};
use tracing::info;

use crate::cli::Cli;
use crate::error::CliError;
use crate::shell::ShellSettings;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    let config = MarketConfig::with_window_minutes(cli.window_minutes)?;
    let mut market = Market::with_config(SystemClock, config)?;
    info!(window_minutes = cli.window_minutes, "market opened");

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(stdin.lock(), stdout.lock(), &mut market, ShellSettings::from(&cli))
}
