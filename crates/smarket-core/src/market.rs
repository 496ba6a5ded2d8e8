//! Registry of stocks keyed by symbol, and the all-share index over them.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::index::geometric_mean;
use crate::{
    MarketConfig, MarketError, Result, Stock, StockMetrics, StockType, Symbol, Trade,
    TradeDirection, ValidationError,
};

/// Owns every listed [`Stock`] and the clock used to stamp their trades.
#[derive(Debug)]
pub struct Market<C = SystemClock> {
    stocks: BTreeMap<Symbol, Stock>,
    clock: C,
    config: MarketConfig,
}

impl Market<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Market<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Market<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            stocks: BTreeMap::new(),
            clock,
            config: MarketConfig::default(),
        }
    }

    pub fn with_config(clock: C, config: MarketConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stocks: BTreeMap::new(),
            clock,
            config,
        })
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Lists a new stock.
    ///
    /// The symbol is compared case-insensitively; listing the same symbol
    /// twice fails with [`MarketError::DuplicateStock`] and leaves the
    /// existing stock in place.
    pub fn add_stock(
        &mut self,
        symbol: &str,
        stock_type: StockType,
        par_value: Decimal,
        last_dividend: Decimal,
        fixed_dividend: Option<Decimal>,
    ) -> Result<&Stock> {
        let symbol = Symbol::parse(symbol)?;
        match self.stocks.entry(symbol) {
            Entry::Occupied(entry) => Err(MarketError::DuplicateStock {
                symbol: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                let stock = Stock::from_parts(
                    entry.key().clone(),
                    stock_type,
                    par_value,
                    last_dividend,
                    fixed_dividend,
                )?;
                info!(
                    symbol = %stock.symbol(),
                    stock_type = stock_type.as_str(),
                    "stock listed"
                );
                Ok(&*entry.insert(stock))
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&Stock> {
        let symbol = Symbol::parse(symbol).ok()?;
        self.stocks.get(&symbol)
    }

    /// Like [`Market::get`], failing with [`MarketError::UnknownStock`].
    pub fn stock(&self, symbol: &str) -> Result<&Stock> {
        self.get(symbol).ok_or_else(|| unknown(symbol))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Records a trade against a listed stock, stamped with the market clock.
    pub fn record_trade(
        &mut self,
        symbol: &str,
        direction: TradeDirection,
        quantity: i64,
        price: Decimal,
    ) -> Result<&Trade> {
        let stock = Symbol::parse(symbol)
            .ok()
            .and_then(|key| self.stocks.get_mut(&key))
            .ok_or_else(|| unknown(symbol))?;

        stock.record_trade(direction, quantity, price, &self.clock)
    }

    /// Dividend yield, P/E ratio and VWSP for `symbol` at `price`.
    pub fn query_stock(&self, symbol: &str, price: Decimal) -> Result<StockMetrics> {
        if price < Decimal::ZERO {
            return Err(ValidationError::NegativeValue { field: "price" }.into());
        }

        let stock = self.stock(symbol)?;
        Ok(stock.metrics(price, self.config.vwsp_window(), self.clock.now()))
    }

    /// Geometric mean of the VWSP of every listed stock.
    ///
    /// Stocks without volume in the window count as `0`, which zeroes the
    /// index. An empty market has an index of `0`.
    pub fn all_share_index(&self) -> Decimal {
        let now = self.clock.now();
        let window = self.config.vwsp_window();
        let prices: Vec<Decimal> = self
            .stocks
            .values()
            .map(|stock| stock.volume_weighted_price(window, now))
            .collect();

        let index = geometric_mean(&prices);
        debug!(stocks = prices.len(), %index, "computed all share index");
        index
    }

    /// Listed stocks in symbol order.
    pub fn stocks(&self) -> impl Iterator<Item = &Stock> {
        self.stocks.values()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

impl<C> Display for Market<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Market with {} stocks", self.stocks.len())
    }
}

fn unknown(symbol: &str) -> MarketError {
    MarketError::UnknownStock {
        symbol: symbol.trim().to_ascii_uppercase(),
    }
}
