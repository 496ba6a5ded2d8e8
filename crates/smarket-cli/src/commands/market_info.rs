use serde_json::json;
use smarket_core::{Clock, Market};

use crate::error::CliError;

use super::CommandResult;

pub fn run<C: Clock>(market: &Market<C>) -> Result<CommandResult, CliError> {
    let index = market.all_share_index();

    Ok(CommandResult::ok(json!({
        "stock_count": market.len(),
        "all_share_index": index,
    }))
    .with_message(market.to_string()))
}
