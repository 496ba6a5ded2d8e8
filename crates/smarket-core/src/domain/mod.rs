//! Value types shared by the ledger and the registry.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Uppercase ticker, the market key |
//! | [`StockType`] | Common or preferred share class |
//! | [`TradeDirection`] | Buy or sell side of a trade |
//! | [`UtcDateTime`] | UTC timestamp used to stamp trades |
//!
//! Monetary amounts and ratios are [`rust_decimal::Decimal`] throughout.

mod kinds;
mod symbol;
mod timestamp;

pub use kinds::{StockType, TradeDirection};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
