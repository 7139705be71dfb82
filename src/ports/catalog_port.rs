//! Catalog source port trait.

use crate::domain::error::BevexError;
use crate::domain::security::Security;

/// Supplies the fixed security catalog at startup.
pub trait CatalogPort {
    fn load_catalog(&self) -> Result<Vec<Security>, BevexError>;
}
