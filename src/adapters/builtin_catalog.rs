//! Built-in security catalog used when no catalog file is configured.

use crate::domain::error::BevexError;
use crate::domain::security::{Security, SecurityKind};
use crate::ports::catalog_port::CatalogPort;

/// The fixed five-entry Global Beverage Corporation Exchange sample set.
pub struct BuiltinCatalog;

impl CatalogPort for BuiltinCatalog {
    fn load_catalog(&self) -> Result<Vec<Security>, BevexError> {
        Ok(vec![
            Security::new("TEA", SecurityKind::Common, 0, 100)?,
            Security::new("POP", SecurityKind::Common, 8, 100)?,
            Security::new("ALE", SecurityKind::Common, 23, 60)?,
            Security::new(
                "GIN",
                SecurityKind::Preferred {
                    fixed_dividend_percent: 2,
                },
                8,
                100,
            )?,
            Security::new("JOE", SecurityKind::Common, 13, 250)?,
        ])
    }
}
