use rust_decimal::Decimal;
use serde::Serialize;
use smarket_core::{Clock, Market, Trade};

use crate::cli::AddTradeArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct AddTradeResponse<'a> {
    symbol: String,
    trade: &'a Trade,
}

pub fn run<C: Clock>(
    args: &AddTradeArgs,
    market: &mut Market<C>,
) -> Result<CommandResult, CliError> {
    let trade = market.record_trade(
        &args.symbol,
        args.direction,
        args.quantity,
        Decimal::from(args.price),
    )?;
    let message = format!("Trade added: {trade}");

    let data = serde_json::to_value(AddTradeResponse {
        symbol: args.symbol.trim().to_ascii_uppercase(),
        trade,
    })?;

    Ok(CommandResult::ok(data).with_message(message))
}
