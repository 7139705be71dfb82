//! Domain error types.

/// Top-level error type for bevex.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BevexError {
    #[error("invalid input: {reason}")]
    Validation { reason: String },

    #[error("unknown stock symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("price must be greater than 0, got {price}")]
    InvalidPrice { price: f64 },

    #[error("no trading activity for {symbol} in the last 5 minutes")]
    NoTradingActivity { symbol: String },

    #[error("no trading activity for any stock")]
    NoMarketActivity,

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("catalog error in {file}: {reason}")]
    CatalogParse { file: String, reason: String },
}

impl From<&BevexError> for std::process::ExitCode {
    fn from(err: &BevexError) -> Self {
        let code: u8 = match err {
            BevexError::ConfigParse { .. } => 2,
            BevexError::CatalogParse { .. } => 3,
            BevexError::Validation { .. }
            | BevexError::UnknownSymbol { .. }
            | BevexError::InvalidPrice { .. } => 4,
            BevexError::NoTradingActivity { .. } | BevexError::NoMarketActivity => 5,
        };
        std::process::ExitCode::from(code)
    }
}
