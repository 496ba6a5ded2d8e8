use thiserror::Error;

/// Validation errors for raw values handed to the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid stock type '{value}', expected one of c, common, p, preferred")]
    InvalidStockType { value: String },
    #[error("invalid trade direction '{value}', expected one of b, buy, s, sell")]
    InvalidTradeDirection { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
    #[error("field '{field}' must be positive")]
    NonPositiveValue { field: &'static str },
}

/// Errors raised by the stock ledger and the market registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("invalid configuration for stock {symbol}: {reason}")]
    InvalidStockConfig { symbol: String, reason: String },

    #[error("invalid trade: {reason}")]
    InvalidTrade { reason: String },

    #[error("stock {symbol} already exists")]
    DuplicateStock { symbol: String },

    #[error("stock {symbol} does not exist")]
    UnknownStock { symbol: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T, E = MarketError> = std::result::Result<T, E>;
