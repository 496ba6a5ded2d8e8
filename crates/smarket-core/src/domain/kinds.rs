use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Class of share, fixed when the stock is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockType {
    Common,
    Preferred,
}

impl StockType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Preferred => "preferred",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Preferred => "Preferred",
        }
    }
}

impl Display for StockType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for StockType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "c" | "common" => Ok(Self::Common),
            "p" | "preferred" => Ok(Self::Preferred),
            other => Err(ValidationError::InvalidStockType {
                value: other.to_owned(),
            }),
        }
    }
}

/// Side of a recorded trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// `+1` for a buy, `-1` for a sell.
    pub const fn sign(self) -> i8 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }
}

impl Display for TradeDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        })
    }
}

impl FromStr for TradeDirection {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "b" | "buy" => Ok(Self::Buy),
            "s" | "sell" => Ok(Self::Sell),
            other => Err(ValidationError::InvalidTradeDirection {
                value: other.to_owned(),
            }),
        }
    }
}
