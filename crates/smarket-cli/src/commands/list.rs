use serde::Serialize;
use smarket_core::{Clock, Market, StockType, Symbol};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ListedStock<'a> {
    symbol: &'a Symbol,
    stock_type: StockType,
    trade_count: usize,
}

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    stocks: Vec<ListedStock<'a>>,
}

pub fn run<C: Clock>(market: &Market<C>) -> Result<CommandResult, CliError> {
    let stocks = market
        .stocks()
        .map(|stock| ListedStock {
            symbol: stock.symbol(),
            stock_type: stock.stock_type(),
            trade_count: stock.trades().len(),
        })
        .collect();

    let data = serde_json::to_value(ListResponse { stocks })?;
    Ok(CommandResult::ok(data).with_message(market.to_string()))
}
