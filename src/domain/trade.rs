//! Executed trades and their validated construction.

use std::fmt;

use chrono::{DateTime, Utc};

use super::error::BevexError;
use super::security::Security;

/// Buy/sell indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Parse from text input, case-insensitive.
    pub fn parse(input: &str) -> Result<Self, BevexError> {
        match input.to_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(BevexError::Validation {
                reason: format!("invalid buy/sell indicator '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// One executed order against a security. Immutable after construction;
/// the ledger never rewrites or removes an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    timestamp: DateTime<Utc>,
    symbol: String,
    side: Side,
    quantity: u64,
    price: f64,
}

impl Trade {
    /// Execute a trade now. The timestamp is stamped from the process
    /// clock, not supplied by the caller.
    pub fn execute(
        security: &Security,
        side: Side,
        quantity: i64,
        price: f64,
    ) -> Result<Self, BevexError> {
        Self::execute_at(security, side, quantity, price, Utc::now())
    }

    /// Execute a trade at an explicit instant. Construction is
    /// all-or-nothing: a trade with a non-positive quantity or price is
    /// never created.
    pub fn execute_at(
        security: &Security,
        side: Side,
        quantity: i64,
        price: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, BevexError> {
        if quantity <= 0 {
            return Err(BevexError::Validation {
                reason: format!("quantity must be greater than 0, got {quantity}"),
            });
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(BevexError::Validation {
                reason: format!("price must be greater than 0, got {price}"),
            });
        }
        Ok(Trade {
            timestamp,
            symbol: security.symbol().to_string(),
            side,
            quantity: quantity as u64,
            price,
        })
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Symbol of the traded security.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} @ {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC"),
            self.side,
            self.quantity,
            self.symbol,
            self.price
        )
    }
}
