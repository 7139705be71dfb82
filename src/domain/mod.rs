//! Core domain types and logic.

pub mod security;
pub mod trade;
pub mod registry;
pub mod ledger;
pub mod metrics;
pub mod error;
