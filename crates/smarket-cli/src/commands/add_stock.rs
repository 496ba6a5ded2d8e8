use rust_decimal::Decimal;
use serde::Serialize;
use smarket_core::{Clock, Market, StockType, Symbol};

use crate::cli::AddStockArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct AddStockResponse<'a> {
    symbol: &'a Symbol,
    stock_type: StockType,
    par_value: Decimal,
    last_dividend: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixed_dividend: Option<Decimal>,
}

pub fn run<C: Clock>(
    args: &AddStockArgs,
    market: &mut Market<C>,
) -> Result<CommandResult, CliError> {
    let stock = market.add_stock(
        &args.symbol,
        args.stock_type,
        Decimal::from(args.par_value),
        Decimal::from(args.last_dividend),
        args.fixed_dividend,
    )?;

    let data = serde_json::to_value(AddStockResponse {
        symbol: stock.symbol(),
        stock_type: stock.stock_type(),
        par_value: stock.par_value(),
        last_dividend: stock.last_dividend(),
        fixed_dividend: stock.fixed_dividend(),
    })?;

    Ok(CommandResult::ok(data).with_message(format!("Stock {} added", stock.symbol())))
}
