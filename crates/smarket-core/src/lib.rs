//! # smarket core
//!
//! A closed-book stock market calculator: a registry of stocks, the trades
//! recorded against each of them, and the figures derived from those trades.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Symbols, stock types, trade directions, timestamps |
//! | [`clock`] | Injectable time source for stamping trades |
//! | [`trade`] | Immutable trade records |
//! | [`stock`] | Per-stock ledger plus dividend yield, P/E and VWSP |
//! | [`market`] | Symbol registry and the all-share index |
//! | [`index`] | Geometric mean used by the index |
//! | [`config`] | Market tunables |
//! | [`error`] | Error types |
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use smarket_core::{Market, StockType, TradeDirection};
//!
//! let mut market = Market::new();
//! market.add_stock("tea", StockType::Common, Decimal::from(100), Decimal::ZERO, None)?;
//! market.record_trade("TEA", TradeDirection::Buy, 10, Decimal::from(95))?;
//!
//! let metrics = market.query_stock("tea", Decimal::from(100))?;
//! assert_eq!(metrics.volume_weighted_price, Decimal::from(95));
//! # Ok::<(), smarket_core::MarketError>(())
//! ```
//!
//! Money is carried as [`rust_decimal::Decimal`] so that yields and ratios
//! compare exactly.

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod index;
pub mod market;
pub mod stock;
pub mod trade;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{MarketConfig, DEFAULT_VWSP_WINDOW_MINUTES};
pub use domain::{StockType, Symbol, TradeDirection, UtcDateTime};
pub use error::{MarketError, Result, ValidationError};
pub use index::geometric_mean;
pub use market::Market;
pub use stock::{Stock, StockMetrics};
pub use trade::Trade;
