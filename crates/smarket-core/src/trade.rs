use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::{MarketError, Result, TradeDirection, UtcDateTime};

/// A single recorded buy or sell, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trade {
    id: Uuid,
    direction: TradeDirection,
    quantity: u64,
    price: Decimal,
    timestamp: UtcDateTime,
    #[serde(skip)]
    notional: Decimal,
}

impl Trade {
    /// Only the stock ledger creates trades.
    pub(crate) fn new(
        direction: TradeDirection,
        quantity: i64,
        price: Decimal,
        timestamp: UtcDateTime,
    ) -> Result<Self> {
        let quantity = u64::try_from(quantity).map_err(|_| MarketError::InvalidTrade {
            reason: format!("quantity must be non-negative, got {quantity}"),
        })?;

        if price < Decimal::ZERO {
            return Err(MarketError::InvalidTrade {
                reason: format!("price must be non-negative, got {price}"),
            });
        }

        let notional = price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| MarketError::InvalidTrade {
                reason: format!("notional of {quantity} at {price} is out of range"),
            })?;

        Ok(Self {
            id: Uuid::new_v4(),
            direction,
            quantity,
            price,
            timestamp,
            notional,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn direction(&self) -> TradeDirection {
        self.direction
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn timestamp(&self) -> UtcDateTime {
        self.timestamp
    }

    /// `price * quantity`, checked to fit a `Decimal` when the trade is made.
    pub fn notional(&self) -> Decimal {
        self.notional
    }
}

impl Display for Trade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} for {}", self.direction, self.quantity, self.price)
    }
}
