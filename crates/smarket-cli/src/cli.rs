//! Argument definitions for the `smarket` binary and for each shell line.
//!
//! The binary takes a handful of global options, then reads commands from
//! stdin one line at a time. Each line is parsed with [`ShellLine`], so the
//! shell gets clap's help output and error messages for free.
//!
//! # Shell commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `add-stock` | List a stock (`add-stock ABC c 60 20`, `add-stock BCD p 80 10 2`) |
//! | `add-trade` | Record a trade (`add-trade ABC b 100 62`) |
//! | `stock-info` | Dividend yield, P/E ratio and VWSP at a price |
//! | `market-info` | All share index |
//! | `list` | Listed stocks |
//! | `help` | Help for the shell or one command |
//! | `exit` | Leave the shell; all market data is lost |

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use smarket_core::{StockType, TradeDirection, DEFAULT_VWSP_WINDOW_MINUTES};

/// Super simple stock market shell.
#[derive(Debug, Parser)]
#[command(
    name = "smarket",
    author,
    version,
    about = "Super simple stock market shell",
    long_about = "Keeps a set of stocks and their trades in memory and reports dividend \
yield, P/E ratio, volume weighted stock price and the all share index.\n\
\n\
Commands are read from stdin, one per line. Type `help` inside the shell for the \
command list. Nothing is persisted: all data is lost on exit."
)]
pub struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Trailing window, in minutes, for the volume weighted stock price.
    #[arg(long, default_value_t = DEFAULT_VWSP_WINDOW_MINUTES)]
    pub window_minutes: u32,

    /// Default log filter when RUST_LOG is unset (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Do not print the input prompt.
    #[arg(long, default_value_t = false)]
    pub no_prompt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// One line typed into the shell.
#[derive(Debug, Parser)]
#[command(
    name = "smarket",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Type `help <command>` for details on a command."
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Add a stock to the market.
    #[command(alias = "add_stock")]
    AddStock(AddStockArgs),

    /// Record a trade against a listed stock, stamped with the current time.
    #[command(alias = "add_trade")]
    AddTrade(AddTradeArgs),

    /// Show dividend yield, P/E ratio and VWSP of the last trades for a stock.
    #[command(alias = "stock_info")]
    StockInfo(StockInfoArgs),

    /// Show the all share index.
    #[command(alias = "market_info")]
    MarketInfo,

    /// List the stocks in the market.
    List,

    /// Close the shell. All market data is lost.
    #[command(alias = "quit")]
    Exit,
}

#[derive(Debug, Args)]
pub struct AddStockArgs {
    /// Stock symbol; stored uppercase.
    pub symbol: String,

    /// `c` / `common` or `p` / `preferred`.
    pub stock_type: StockType,

    /// Par value in pennies.
    #[arg(allow_negative_numbers = true)]
    pub par_value: i64,

    /// Last dividend in pennies.
    #[arg(allow_negative_numbers = true)]
    pub last_dividend: i64,

    /// Fixed dividend as a percentage; required for preferred stock.
    #[arg(allow_negative_numbers = true)]
    pub fixed_dividend: Option<Decimal>,
}

#[derive(Debug, Args)]
pub struct AddTradeArgs {
    /// Symbol of a listed stock.
    pub symbol: String,

    /// `b` / `buy` or `s` / `sell`.
    pub direction: TradeDirection,

    /// Number of shares.
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,

    /// Price in pennies.
    #[arg(allow_negative_numbers = true)]
    pub price: i64,
}

#[derive(Debug, Args)]
pub struct StockInfoArgs {
    /// Symbol of a listed stock.
    pub symbol: String,

    /// Price in pennies.
    #[arg(allow_negative_numbers = true)]
    pub price: i64,
}
