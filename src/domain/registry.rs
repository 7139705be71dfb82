//! Security registry: the fixed catalog of tradable instruments.

use std::collections::HashMap;

use super::error::BevexError;
use super::security::Security;

/// Symbol-keyed catalog, populated once at startup and immutable for the
/// life of the process. Iteration preserves catalog insertion order.
#[derive(Debug, Clone)]
pub struct Registry {
    securities: Vec<Security>,
    by_symbol: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from a catalog. Duplicate symbols are rejected
    /// rather than silently overwritten.
    pub fn new(catalog: Vec<Security>) -> Result<Self, BevexError> {
        let mut by_symbol = HashMap::with_capacity(catalog.len());
        for (idx, security) in catalog.iter().enumerate() {
            if by_symbol.insert(security.symbol().to_string(), idx).is_some() {
                return Err(BevexError::Validation {
                    reason: format!("duplicate symbol in catalog: {}", security.symbol()),
                });
            }
        }
        Ok(Registry {
            securities: catalog,
            by_symbol,
        })
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, symbol: &str) -> Result<&Security, BevexError> {
        self.by_symbol
            .get(symbol)
            .map(|&idx| &self.securities[idx])
            .ok_or_else(|| BevexError::UnknownSymbol {
                symbol: symbol.to_string(),
            })
    }

    /// Securities in catalog insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Security> {
        self.securities.iter()
    }

    /// Symbols in catalog insertion order.
    pub fn symbols(&self) -> Vec<&str> {
        self.securities.iter().map(|s| s.symbol()).collect()
    }

    pub fn len(&self) -> usize {
        self.securities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.securities.is_empty()
    }
}
