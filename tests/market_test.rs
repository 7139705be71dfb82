//! End-to-end market scenarios: registry + ledger + metrics together.

mod common;

use approx::assert_relative_eq;
use bevex::adapters::builtin_catalog::BuiltinCatalog;
use bevex::domain::error::BevexError;
use bevex::domain::ledger::Ledger;
use bevex::domain::metrics::{all_share_index, dividend_yield, volume_weighted_price};
use bevex::domain::registry::Registry;
use bevex::ports::catalog_port::CatalogPort;
use common::*;
use proptest::prelude::*;

fn builtin_registry() -> Registry {
    Registry::new(BuiltinCatalog.load_catalog().unwrap()).unwrap()
}

#[test]
fn trading_session_end_to_end() {
    let registry = builtin_registry();
    let mut ledger = Ledger::new();

    let tea = registry.lookup("TEA").unwrap();
    let gin = registry.lookup("GIN").unwrap();
    ledger.append(trade_seconds_ago(tea, 100, 10.0, 120));
    ledger.append(trade_seconds_ago(tea, 50, 20.0, 60));
    ledger.append(trade_seconds_ago(gin, 30, 25.0, 30));

    let tea_vwap = volume_weighted_price(tea, ledger.all(), fixed_now()).unwrap();
    assert_relative_eq!(tea_vwap, 2000.0 / 150.0, max_relative = 1e-9);

    let gin_vwap = volume_weighted_price(gin, ledger.all(), fixed_now()).unwrap();
    assert_relative_eq!(gin_vwap, 25.0, max_relative = 1e-9);

    // POP never traded, so its VWAP fails while the index still resolves
    // from the two active stocks.
    let pop = registry.lookup("POP").unwrap();
    let err = volume_weighted_price(pop, ledger.all(), fixed_now()).unwrap_err();
    assert!(matches!(err, BevexError::NoTradingActivity { symbol } if symbol == "POP"));

    let index = all_share_index(&registry, ledger.all(), fixed_now()).unwrap();
    assert_relative_eq!(index, (tea_vwap * gin_vwap).sqrt(), max_relative = 1e-9);
}

#[test]
fn dividend_yields_against_builtin_catalog() {
    let registry = builtin_registry();

    let pop = registry.lookup("POP").unwrap();
    assert_relative_eq!(dividend_yield(pop, 2.0).unwrap(), 4.0, max_relative = 1e-9);

    let gin = registry.lookup("GIN").unwrap();
    assert_relative_eq!(
        dividend_yield(gin, 50.0).unwrap(),
        0.04,
        max_relative = 1e-9
    );

    let tea = registry.lookup("TEA").unwrap();
    assert_relative_eq!(dividend_yield(tea, 7.0).unwrap(), 0.0);
}

#[test]
fn window_boundary_is_strict_at_five_minutes() {
    let registry = builtin_registry();
    let ale = registry.lookup("ALE").unwrap();
    let mut ledger = Ledger::new();

    ledger.append(trade_seconds_ago(ale, 10, 100.0, 5 * 60 + 1));
    let err = volume_weighted_price(ale, ledger.all(), fixed_now()).unwrap_err();
    assert!(matches!(err, BevexError::NoTradingActivity { .. }));

    ledger.append(trade_seconds_ago(ale, 10, 8.0, 5 * 60 - 1));
    let vwap = volume_weighted_price(ale, ledger.all(), fixed_now()).unwrap();
    assert_relative_eq!(vwap, 8.0, max_relative = 1e-9);
}

#[test]
fn index_matches_directly_computed_geometric_mean() {
    let securities = vec![
        common_stock("AAA", 1, 100),
        common_stock("BBB", 1, 100),
        preferred_stock("CCC", 2, 100),
        common_stock("DDD", 1, 100),
    ];
    let prices = [1.5_f64, 12.0, 0.07, 430.0];

    let mut ledger = Ledger::new();
    for (sec, price) in securities.iter().zip(prices) {
        ledger.append(trade_seconds_ago(sec, 20, price, 90));
    }
    let registry = Registry::new(securities).unwrap();

    let index = all_share_index(&registry, ledger.all(), fixed_now()).unwrap();
    let expected = prices.iter().product::<f64>().powf(1.0 / prices.len() as f64);
    assert_relative_eq!(index, expected, max_relative = 1e-9);
}

#[test]
fn index_with_only_stale_trades_is_a_global_error() {
    let registry = builtin_registry();
    let mut ledger = Ledger::new();
    for security in registry.iter() {
        ledger.append(trade_seconds_ago(security, 10, 5.0, 10 * 60));
    }
    let err = all_share_index(&registry, ledger.all(), fixed_now()).unwrap_err();
    assert!(matches!(err, BevexError::NoMarketActivity));
}

proptest! {
    /// Appending never rewrites history: length grows by one and every
    /// prior entry is unchanged.
    #[test]
    fn ledger_is_append_only(orders in prop::collection::vec((1i64..1000, 0.01f64..1000.0), 1..40)) {
        let ale = common_stock("ALE", 23, 60);
        let mut ledger = Ledger::new();

        for (quantity, price) in orders {
            let before = ledger.all().to_vec();
            ledger.append(trade_seconds_ago(&ale, quantity, price, 60));
            prop_assert_eq!(ledger.len(), before.len() + 1);
            prop_assert_eq!(&ledger.all()[..before.len()], &before[..]);
        }
    }

    /// The volume-weighted price always falls between the cheapest and the
    /// most expensive in-window trade.
    #[test]
    fn vwap_is_bounded_by_trade_prices(orders in prop::collection::vec((1i64..1000, 0.01f64..1000.0), 1..40)) {
        let ale = common_stock("ALE", 23, 60);
        let mut ledger = Ledger::new();
        for &(quantity, price) in &orders {
            ledger.append(trade_seconds_ago(&ale, quantity, price, 60));
        }

        let vwap = volume_weighted_price(&ale, ledger.all(), fixed_now()).unwrap();
        let min = orders.iter().map(|&(_, p)| p).fold(f64::INFINITY, f64::min);
        let max = orders.iter().map(|&(_, p)| p).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(vwap >= min - 1e-9);
        prop_assert!(vwap <= max + 1e-9);
    }
}
