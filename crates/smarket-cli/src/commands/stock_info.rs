use rust_decimal::Decimal;
use smarket_core::{Clock, Market};

use crate::cli::StockInfoArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run<C: Clock>(
    args: &StockInfoArgs,
    market: &Market<C>,
) -> Result<CommandResult, CliError> {
    let metrics = market.query_stock(&args.symbol, Decimal::from(args.price))?;
    let window = market.config().vwsp_window_minutes;
    let data = serde_json::to_value(&metrics)?;

    Ok(CommandResult::ok(data).with_message(format!(
        "Volume weighted stock price is based on trades in the past {window} minutes"
    )))
}
