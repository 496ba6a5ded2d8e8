mod add_stock;
mod add_trade;
mod list;
mod market_info;
mod stock_info;

use serde_json::Value;
use smarket_core::{Clock, Market};

use crate::cli::ShellCommand;
use crate::error::CliError;

/// Outcome of one shell command, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub message: Option<String>,
    pub data: Value,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Runs a parsed command against the market. `exit` is handled by the shell
/// and never reaches this point.
pub fn run<C: Clock>(
    command: &ShellCommand,
    market: &mut Market<C>,
) -> Result<CommandResult, CliError> {
    match command {
        ShellCommand::AddStock(args) => add_stock::run(args, market),
        ShellCommand::AddTrade(args) => add_trade::run(args, market),
        ShellCommand::StockInfo(args) => stock_info::run(args, market),
        ShellCommand::MarketInfo => market_info::run(market),
        ShellCommand::List => list::run(market),
        ShellCommand::Exit => Err(CliError::Usage("exit is handled by the shell".to_owned())),
    }
}
