//! Trade ledger: append-only history of executed trades.

use super::trade::Trade;

/// Append-only, insertion-ordered trade history. Timestamps are stamped
/// from a monotone non-decreasing process clock, so insertion order is
/// also time order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    trades: Vec<Trade>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger { trades: Vec::new() }
    }

    /// Record an executed trade. Validation already happened at
    /// construction, so this cannot fail.
    pub fn append(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// All trades in insertion/time order.
    pub fn all(&self) -> &[Trade] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
