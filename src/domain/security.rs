//! Tradable securities and their validated construction.

use std::fmt;

use super::error::BevexError;

/// The two recognized security classes. Preferred stock carries its fixed
/// dividend as a whole-number percentage of par value, so a Preferred
/// security without one cannot exist after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityKind {
    Common,
    Preferred { fixed_dividend_percent: u64 },
}

impl SecurityKind {
    /// Build a kind from text input plus an optional fixed dividend percent.
    ///
    /// Case-insensitive on the kind name. The fixed dividend is mandatory
    /// for `preferred` and must be absent for `common`.
    pub fn from_parts(kind: &str, fixed_dividend_percent: Option<i64>) -> Result<Self, BevexError> {
        match (kind.to_lowercase().as_str(), fixed_dividend_percent) {
            ("common", None) => Ok(SecurityKind::Common),
            ("common", Some(_)) => Err(BevexError::Validation {
                reason: "fixed dividend percent is only valid for preferred stock".into(),
            }),
            ("preferred", Some(pct)) if pct >= 0 => Ok(SecurityKind::Preferred {
                fixed_dividend_percent: pct as u64,
            }),
            ("preferred", Some(pct)) => Err(BevexError::Validation {
                reason: format!("fixed dividend percent cannot be negative, got {pct}"),
            }),
            ("preferred", None) => Err(BevexError::Validation {
                reason: "preferred stock requires a fixed dividend percent".into(),
            }),
            (other, _) => Err(BevexError::Validation {
                reason: format!("unknown security kind '{other}', expected common or preferred"),
            }),
        }
    }
}

impl fmt::Display for SecurityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityKind::Common => write!(f, "common"),
            SecurityKind::Preferred { .. } => write!(f, "preferred"),
        }
    }
}

/// One tradable instrument. Immutable after construction; the registry
/// hands out shared references only.
#[derive(Debug, Clone, PartialEq)]
pub struct Security {
    symbol: String,
    kind: SecurityKind,
    last_dividend: u64,
    par_value: u64,
}

impl Security {
    /// Validated constructor. Signed integers come straight from the input
    /// boundary; negative dividends, non-positive par values, and empty
    /// symbols are rejected here so a `Security` is never partially valid.
    pub fn new(
        symbol: impl Into<String>,
        kind: SecurityKind,
        last_dividend: i64,
        par_value: i64,
    ) -> Result<Self, BevexError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(BevexError::Validation {
                reason: "symbol cannot be empty".into(),
            });
        }
        if last_dividend < 0 {
            return Err(BevexError::Validation {
                reason: format!("last dividend cannot be negative, got {last_dividend}"),
            });
        }
        if par_value <= 0 {
            return Err(BevexError::Validation {
                reason: format!("par value must be greater than 0, got {par_value}"),
            });
        }
        Ok(Security {
            symbol,
            kind,
            last_dividend: last_dividend as u64,
            par_value: par_value as u64,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn kind(&self) -> SecurityKind {
        self.kind
    }

    pub fn last_dividend(&self) -> u64 {
        self.last_dividend
    }

    /// Fixed dividend percent for Preferred stock, `None` for Common.
    pub fn fixed_dividend_percent(&self) -> Option<u64> {
        match self.kind {
            SecurityKind::Common => None,
            SecurityKind::Preferred {
                fixed_dividend_percent,
            } => Some(fixed_dividend_percent),
        }
    }

    pub fn par_value(&self) -> u64 {
        self.par_value
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} last_dividend={} par_value={}",
            self.symbol, self.kind, self.last_dividend, self.par_value
        )?;
        if let Some(pct) = self.fixed_dividend_percent() {
            write!(f, " fixed_dividend={pct}%")?;
        }
        Ok(())
    }
}
