//! A listed stock: static dividend terms plus its append-only trade ledger.
//!
//! All figures are exact decimals. The three metrics are total over
//! non-negative prices: a zero price or a zero yield produces `0` instead of
//! a division error, and a yield or ratio too large for a `Decimal` saturates
//! at [`Decimal::MAX`]. Amounts that would make the ledger itself
//! unrepresentable are rejected when the stock or trade is created.

use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::Serialize;
use time::Duration;
use tracing::{debug, trace, warn};

use crate::clock::Clock;
use crate::config::DEFAULT_VWSP_WINDOW_MINUTES;
use crate::{MarketError, Result, StockType, Symbol, Trade, TradeDirection, UtcDateTime};

/// The three figures reported for a stock at a given price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockMetrics {
    pub symbol: Symbol,
    pub price: Decimal,
    pub dividend_yield: Decimal,
    pub price_earnings_ratio: Decimal,
    pub volume_weighted_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stock {
    symbol: Symbol,
    stock_type: StockType,
    par_value: Decimal,
    last_dividend: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixed_dividend: Option<Decimal>,
    trades: Vec<Trade>,
    #[serde(skip)]
    dividend: Decimal,
    #[serde(skip)]
    ledger_notional: Decimal,
    #[serde(skip)]
    ledger_volume: Decimal,
}

impl Stock {
    /// `fixed_dividend` is a percentage of par value and is required for
    /// preferred stock. It is kept but unused for common stock.
    pub fn new(
        symbol: &str,
        stock_type: StockType,
        par_value: Decimal,
        last_dividend: Decimal,
        fixed_dividend: Option<Decimal>,
    ) -> Result<Self> {
        let symbol = Symbol::parse(symbol)?;
        Self::from_parts(symbol, stock_type, par_value, last_dividend, fixed_dividend)
    }

    pub(crate) fn from_parts(
        symbol: Symbol,
        stock_type: StockType,
        par_value: Decimal,
        last_dividend: Decimal,
        fixed_dividend: Option<Decimal>,
    ) -> Result<Self> {
        let invalid = |reason: &str| MarketError::InvalidStockConfig {
            symbol: symbol.to_string(),
            reason: reason.to_owned(),
        };

        if par_value < Decimal::ZERO {
            return Err(invalid("par value must be non-negative"));
        }
        if last_dividend < Decimal::ZERO {
            return Err(invalid("last dividend must be non-negative"));
        }
        if matches!(fixed_dividend, Some(fixed) if fixed < Decimal::ZERO) {
            return Err(invalid("fixed dividend must be non-negative"));
        }

        let dividend = match (stock_type, fixed_dividend) {
            (StockType::Common, _) => last_dividend,
            (StockType::Preferred, Some(fixed)) => fixed
                .checked_mul(par_value)
                .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
                .ok_or_else(|| invalid("fixed dividend on par value is out of range"))?,
            (StockType::Preferred, None) => {
                return Err(invalid("preferred stock requires a fixed dividend"));
            }
        };

        Ok(Self {
            symbol,
            stock_type,
            par_value,
            last_dividend,
            fixed_dividend,
            trades: Vec::new(),
            dividend,
            ledger_notional: Decimal::ZERO,
            ledger_volume: Decimal::ZERO,
        })
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn stock_type(&self) -> StockType {
        self.stock_type
    }

    pub fn par_value(&self) -> Decimal {
        self.par_value
    }

    pub fn last_dividend(&self) -> Decimal {
        self.last_dividend
    }

    pub fn fixed_dividend(&self) -> Option<Decimal> {
        self.fixed_dividend
    }

    /// Trades in recording order.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Appends a trade stamped with `clock.now()`.
    ///
    /// Fails with [`MarketError::InvalidTrade`] for a negative quantity or
    /// price, or when the ledger's total notional or volume would no longer
    /// fit a `Decimal`; the ledger is left untouched in that case.
    pub fn record_trade<C>(
        &mut self,
        direction: TradeDirection,
        quantity: i64,
        price: Decimal,
        clock: &C,
    ) -> Result<&Trade>
    where
        C: Clock + ?Sized,
    {
        let trade = Trade::new(direction, quantity, price, clock.now())?;
        let ledger_notional = self.ledger_notional.checked_add(trade.notional());
        let ledger_volume = self.ledger_volume.checked_add(Decimal::from(trade.quantity()));
        let (Some(ledger_notional), Some(ledger_volume)) = (ledger_notional, ledger_volume) else {
            return Err(MarketError::InvalidTrade {
                reason: format!("ledger total for {} is out of range", self.symbol),
            });
        };

        if let Some(last) = self.trades.last() {
            if trade.timestamp() < last.timestamp() {
                warn!(
                    symbol = %self.symbol,
                    previous = %last.timestamp(),
                    recorded = %trade.timestamp(),
                    "trade recorded out of time order"
                );
            }
        }

        debug!(
            symbol = %self.symbol,
            direction = direction.as_str(),
            quantity = trade.quantity(),
            price = %trade.price(),
            "trade recorded"
        );

        self.ledger_notional = ledger_notional;
        self.ledger_volume = ledger_volume;
        let index = self.trades.len();
        self.trades.push(trade);
        Ok(&self.trades[index])
    }

    /// Dividend paid per share over `price`, or `0` when `price` is zero.
    ///
    /// Saturates at [`Decimal::MAX`] for prices small enough to overflow.
    pub fn dividend_yield(&self, price: Decimal) -> Decimal {
        if price.is_zero() {
            return Decimal::ZERO;
        }

        self.dividend.checked_div(price).unwrap_or(Decimal::MAX)
    }

    /// `price / dividend_yield(price)`, or `0` when the yield is zero.
    ///
    /// Saturates at [`Decimal::MAX`] like [`Stock::dividend_yield`].
    pub fn price_earnings_ratio(&self, price: Decimal) -> Decimal {
        let dividend_yield = self.dividend_yield(price);
        if dividend_yield.is_zero() {
            return Decimal::ZERO;
        }

        price.checked_div(dividend_yield).unwrap_or(Decimal::MAX)
    }

    /// The trailing run of trades stamped strictly after `now - window`.
    ///
    /// Scanning stops at the newest trade at or before the cutoff; nothing
    /// older than that is considered even if it were out of order.
    pub fn recent_trades(&self, window: Duration, now: UtcDateTime) -> &[Trade] {
        let cutoff = now.saturating_sub(window);
        let start = self
            .trades
            .iter()
            .rposition(|trade| trade.timestamp() <= cutoff)
            .map_or(0, |index| index + 1);

        &self.trades[start..]
    }

    /// Volume weighted stock price over the trades inside `window`.
    ///
    /// Returns `0` when the window holds no volume. The window sums never
    /// exceed the ledger totals checked by [`Stock::record_trade`], so the
    /// zero fallback on overflow is not reached in practice.
    pub fn volume_weighted_price(&self, window: Duration, now: UtcDateTime) -> Decimal {
        let recent = self.recent_trades(window, now);
        let Some((notional, volume)) = recent.iter().try_fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(notional, volume), trade| {
                Some((
                    notional.checked_add(trade.notional())?,
                    volume.checked_add(Decimal::from(trade.quantity()))?,
                ))
            },
        ) else {
            return Decimal::ZERO;
        };

        trace!(
            symbol = %self.symbol,
            trades = recent.len(),
            %volume,
            "evaluated vwsp window"
        );

        if volume.is_zero() {
            return Decimal::ZERO;
        }

        notional.checked_div(volume).unwrap_or(Decimal::ZERO)
    }

    /// Volume weighted stock price over the default 15 minute window.
    pub fn volume_weighted_price_default(&self, now: UtcDateTime) -> Decimal {
        self.volume_weighted_price(
            Duration::minutes(i64::from(DEFAULT_VWSP_WINDOW_MINUTES)),
            now,
        )
    }

    pub fn metrics(&self, price: Decimal, window: Duration, now: UtcDateTime) -> StockMetrics {
        StockMetrics {
            symbol: self.symbol.clone(),
            price,
            dividend_yield: self.dividend_yield(price),
            price_earnings_ratio: self.price_earnings_ratio(price),
            volume_weighted_price: self.volume_weighted_price(window, now),
        }
    }
}

impl Display for Stock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.symbol, self.stock_type)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ManualClock;

    fn clock() -> ManualClock {
        ManualClock::new(UtcDateTime::parse("2024-05-01T12:00:00Z").expect("valid timestamp"))
    }

    fn common(last_dividend: Decimal) -> Stock {
        Stock::new("abc", StockType::Common, dec!(100), last_dividend, None)
            .expect("valid common stock")
    }

    #[test]
    fn normalizes_symbol_and_displays_type() {
        let stock = common(dec!(10));
        assert_eq!(stock.symbol().as_str(), "ABC");
        assert_eq!(stock.to_string(), "ABC - Common");
    }

    #[test]
    fn common_yield_uses_last_dividend() {
        let stock = common(dec!(12));
        assert_eq!(stock.dividend_yield(dec!(10)), dec!(1.2));
    }

    #[test]
    fn preferred_yield_uses_fixed_dividend_on_par() {
        let stock = Stock::new(
            "bcd",
            StockType::Preferred,
            dec!(150),
            dec!(8),
            Some(dec!(2)),
        )
        .expect("valid preferred stock");
        assert_eq!(stock.dividend_yield(dec!(10)), dec!(0.3));
    }

    #[test]
    fn common_ignores_fixed_dividend() {
        let stock = Stock::new("abc", StockType::Common, dec!(100), dec!(5), Some(dec!(50)))
            .expect("valid common stock");
        assert_eq!(stock.dividend_yield(dec!(10)), dec!(0.5));
    }

    #[test]
    fn zero_price_gives_zero_yield_and_ratio() {
        let stock = common(dec!(10));
        assert_eq!(stock.dividend_yield(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(stock.price_earnings_ratio(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn zero_dividend_gives_zero_ratio() {
        let stock = common(Decimal::ZERO);
        assert_eq!(stock.price_earnings_ratio(dec!(25)), Decimal::ZERO);
    }

    #[test]
    fn ratio_divides_price_by_yield() {
        let stock = common(dec!(10));
        assert_eq!(stock.price_earnings_ratio(dec!(5)), dec!(2.5));
    }

    #[test]
    fn preferred_without_fixed_dividend_is_rejected() {
        let err = Stock::new("bcd", StockType::Preferred, dec!(100), dec!(8), None)
            .expect_err("must fail");
        assert!(matches!(
            err,
            MarketError::InvalidStockConfig { ref symbol, .. } if symbol == "BCD"
        ));
    }

    #[test]
    fn negative_par_value_is_rejected() {
        let err = Stock::new("abc", StockType::Common, dec!(-1), dec!(8), None)
            .expect_err("must fail");
        assert!(matches!(err, MarketError::InvalidStockConfig { .. }));
    }

    #[test]
    fn invalid_symbol_surfaces_as_validation_error() {
        let err = Stock::new("", StockType::Common, dec!(100), dec!(8), None)
            .expect_err("must fail");
        assert!(matches!(err, MarketError::Validation(_)));
    }

    #[test]
    fn records_trades_in_order() {
        let clock = clock();
        let mut stock = common(dec!(10));
        stock
            .record_trade(TradeDirection::Buy, 5, dec!(10), &clock)
            .expect("valid trade");
        clock.advance(Duration::seconds(1));
        stock
            .record_trade(TradeDirection::Sell, 1, dec!(1), &clock)
            .expect("valid trade");

        let trades = stock.trades();
        assert_eq!(trades.len(), 2);
        assert!(trades[1].timestamp() > trades[0].timestamp());
        assert_eq!(trades[1].direction(), TradeDirection::Sell);
    }

    #[test]
    fn rejected_trade_leaves_ledger_untouched() {
        let clock = clock();
        let mut stock = common(dec!(10));
        let err = stock
            .record_trade(TradeDirection::Buy, -1, dec!(10), &clock)
            .expect_err("must fail");
        assert!(matches!(err, MarketError::InvalidTrade { .. }));
        assert!(stock.trades().is_empty());
    }

    #[test]
    fn vwsp_skips_trades_older_than_window() {
        let clock = clock();
        let mut stock = common(dec!(10));
        stock
            .record_trade(TradeDirection::Buy, 1000, dec!(1), &clock)
            .expect("valid trade");
        clock.advance(Duration::minutes(16));
        stock
            .record_trade(TradeDirection::Buy, 2, dec!(5), &clock)
            .expect("valid trade");
        stock
            .record_trade(TradeDirection::Sell, 4, dec!(2), &clock)
            .expect("valid trade");
        stock
            .record_trade(TradeDirection::Buy, 4, dec!(2), &clock)
            .expect("valid trade");

        assert_eq!(stock.volume_weighted_price_default(clock.now()), dec!(2.6));
    }

    #[test]
    fn trade_exactly_at_cutoff_is_excluded() {
        let clock = clock();
        let mut stock = common(dec!(10));
        stock
            .record_trade(TradeDirection::Buy, 10, dec!(3), &clock)
            .expect("valid trade");
        clock.advance(Duration::minutes(15));

        assert_eq!(stock.recent_trades(Duration::minutes(15), clock.now()).len(), 0);
        assert_eq!(stock.volume_weighted_price_default(clock.now()), Decimal::ZERO);
    }

    #[test]
    fn scan_stops_at_first_stale_trade() {
        let clock = clock();
        let mut stock = common(dec!(10));
        stock
            .record_trade(TradeDirection::Buy, 1, dec!(7), &clock)
            .expect("valid trade");
        clock.advance(Duration::minutes(-30));
        stock
            .record_trade(TradeDirection::Buy, 1, dec!(100), &clock)
            .expect("valid trade");
        clock.advance(Duration::minutes(30));

        // The newest entry is stale, so the fresh one before it is never reached.
        assert_eq!(stock.volume_weighted_price_default(clock.now()), Decimal::ZERO);
    }

    #[test]
    fn zero_quantity_window_gives_zero() {
        let clock = clock();
        let mut stock = common(dec!(10));
        stock
            .record_trade(TradeDirection::Buy, 0, dec!(9), &clock)
            .expect("valid trade");
        assert_eq!(stock.volume_weighted_price_default(clock.now()), Decimal::ZERO);
    }

    #[test]
    fn metrics_bundle_all_figures() {
        let clock = clock();
        let mut stock = common(dec!(12));
        stock
            .record_trade(TradeDirection::Buy, 10, dec!(4), &clock)
            .expect("valid trade");

        let metrics = stock.metrics(dec!(10), Duration::minutes(15), clock.now());
        assert_eq!(metrics.dividend_yield, dec!(1.2));
        assert_eq!(metrics.price_earnings_ratio.round_dp(4), dec!(8.3333));
        assert_eq!(metrics.volume_weighted_price, dec!(4));
    }

    #[test]
    fn ratio_saturates_when_price_overflows_it() {
        let stock = common(Decimal::ONE);
        let price = Decimal::from(i64::MAX);
        assert!(stock.dividend_yield(price) > Decimal::ZERO);
        assert_eq!(stock.price_earnings_ratio(price), Decimal::MAX);
    }

    #[test]
    fn yield_saturates_for_tiny_price() {
        let stock = common(Decimal::MAX);
        assert_eq!(stock.dividend_yield(dec!(0.001)), Decimal::MAX);
    }

    #[test]
    fn preferred_dividend_beyond_decimal_range_is_rejected() {
        let err = Stock::new(
            "bcd",
            StockType::Preferred,
            Decimal::MAX,
            dec!(8),
            Some(Decimal::MAX),
        )
        .expect_err("must fail");
        assert!(matches!(
            err,
            MarketError::InvalidStockConfig { ref reason, .. } if reason.contains("out of range")
        ));
    }

    #[test]
    fn trade_pushing_ledger_total_out_of_range_is_rejected() {
        let clock = clock();
        let mut stock = common(dec!(10));
        let price = Decimal::from(400_000_000_000_000_i64);
        stock
            .record_trade(TradeDirection::Buy, 100_000_000_000_000, price, &clock)
            .expect("valid trade");

        let err = stock
            .record_trade(TradeDirection::Buy, 100_000_000_000_000, price, &clock)
            .expect_err("must fail");
        assert!(matches!(err, MarketError::InvalidTrade { .. }));
        assert_eq!(stock.trades().len(), 1);
        assert_eq!(stock.volume_weighted_price_default(clock.now()), price);
    }
}
