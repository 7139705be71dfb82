//! Shared fixtures for the integration suite.

use bevex::domain::security::{Security, SecurityKind};
use bevex::domain::trade::{Side, Trade};
use chrono::{DateTime, Duration, Utc};

/// A fixed "now" so window arithmetic is deterministic.
pub fn fixed_now() -> DateTime<Utc> {
    "2024-03-01T12:00:00Z".parse().unwrap()
}

pub fn common_stock(symbol: &str, last_dividend: i64, par_value: i64) -> Security {
    Security::new(symbol, SecurityKind::Common, last_dividend, par_value).unwrap()
}

pub fn preferred_stock(symbol: &str, fixed_pct: i64, par_value: i64) -> Security {
    let kind = SecurityKind::from_parts("preferred", Some(fixed_pct)).unwrap();
    Security::new(symbol, kind, 8, par_value).unwrap()
}

/// A buy trade stamped the given number of seconds before [`fixed_now`].
pub fn trade_seconds_ago(security: &Security, quantity: i64, price: f64, seconds: i64) -> Trade {
    Trade::execute_at(
        security,
        Side::Buy,
        quantity,
        price,
        fixed_now() - Duration::seconds(seconds),
    )
    .unwrap()
}
