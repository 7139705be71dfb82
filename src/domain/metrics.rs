//! Market metrics computed over registry and ledger snapshots.
//!
//! Every function here is pure: the current instant is an explicit
//! argument, never read from a global clock.

use chrono::{DateTime, Duration, Utc};

use super::error::BevexError;
use super::registry::Registry;
use super::security::{Security, SecurityKind};
use super::trade::Trade;

/// Trailing window for the volume-weighted price, in minutes.
pub const TRAILING_WINDOW_MINUTES: i64 = 5;

/// Dividend yield for a security at the given market price.
///
/// Common: `last_dividend / price`. Preferred: the fixed dividend is a
/// whole-number percent of par value, so
/// `(fixed_dividend_percent * par_value) / (price * 100)`.
pub fn dividend_yield(security: &Security, price: f64) -> Result<f64, BevexError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(BevexError::InvalidPrice { price });
    }
    let yield_value = match security.kind() {
        SecurityKind::Common => security.last_dividend() as f64 / price,
        SecurityKind::Preferred {
            fixed_dividend_percent,
        } => (fixed_dividend_percent * security.par_value()) as f64 / (price * 100.0),
    };
    Ok(yield_value)
}

/// Price/earnings ratio.
///
/// Not yet implemented: returns the sentinel `0.0` for every input until
/// an earnings source exists to divide by.
pub fn pe_ratio(_security: &Security, _price: f64) -> f64 {
    0.0
}

/// Volume-weighted price of a security over the trailing window ending
/// at `now`.
///
/// Only trades strictly newer than `now - 5min` for the same symbol
/// count; a trade exactly on the cutoff is excluded. Fails with
/// [`BevexError::NoTradingActivity`] when the window holds no volume.
pub fn volume_weighted_price(
    security: &Security,
    trades: &[Trade],
    now: DateTime<Utc>,
) -> Result<f64, BevexError> {
    let cutoff = now - Duration::minutes(TRAILING_WINDOW_MINUTES);
    let mut weighted_sum = 0.0_f64;
    let mut volume = 0_u64;

    for trade in trades {
        if trade.timestamp() > cutoff && trade.symbol() == security.symbol() {
            weighted_sum += trade.price() * trade.quantity() as f64;
            volume += trade.quantity();
        }
    }

    if volume == 0 {
        return Err(BevexError::NoTradingActivity {
            symbol: security.symbol().to_string(),
        });
    }
    Ok(weighted_sum / volume as f64)
}

/// All-share index: geometric mean of the volume-weighted prices of every
/// security with trading activity in the window.
///
/// Securities without recent trades are skipped by matching the
/// [`BevexError::NoTradingActivity`] variant; any other failure
/// propagates. Fails with [`BevexError::NoMarketActivity`] when no
/// security traded at all.
///
/// The mean is computed as mean-of-logs then exponentiated, which stays
/// stable where a running product would overflow or underflow.
pub fn all_share_index(
    registry: &Registry,
    trades: &[Trade],
    now: DateTime<Utc>,
) -> Result<f64, BevexError> {
    let mut log_sum = 0.0_f64;
    let mut count = 0_usize;

    for security in registry.iter() {
        match volume_weighted_price(security, trades, now) {
            Ok(price) => {
                log_sum += price.ln();
                count += 1;
            }
            Err(BevexError::NoTradingActivity { .. }) => continue,
            Err(other) => return Err(other),
        }
    }

    if count == 0 {
        return Err(BevexError::NoMarketActivity);
    }
    Ok((log_sum / count as f64).exp())
}
