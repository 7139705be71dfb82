//! CSV security catalog adapter.
//!
//! Expected header: `symbol,kind,last_dividend,fixed_dividend_percent,par_value`.
//! An empty fixed-dividend field means the security has none.

use std::fs;
use std::path::PathBuf;

use crate::domain::error::BevexError;
use crate::domain::security::{Security, SecurityKind};
use crate::ports::catalog_port::CatalogPort;

pub struct CsvCatalogAdapter {
    path: PathBuf,
}

impl CsvCatalogAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn catalog_error(&self, reason: String) -> BevexError {
        BevexError::CatalogParse {
            file: self.path.display().to_string(),
            reason,
        }
    }

    fn field<'a>(
        &self,
        record: &'a csv::StringRecord,
        idx: usize,
        name: &str,
    ) -> Result<&'a str, BevexError> {
        record
            .get(idx)
            .map(str::trim)
            .ok_or_else(|| self.catalog_error(format!("missing {name} column")))
    }

    fn int_field(
        &self,
        record: &csv::StringRecord,
        idx: usize,
        name: &str,
    ) -> Result<i64, BevexError> {
        self.field(record, idx, name)?
            .parse()
            .map_err(|e| self.catalog_error(format!("invalid {name} value: {e}")))
    }
}

impl CatalogPort for CsvCatalogAdapter {
    fn load_catalog(&self) -> Result<Vec<Security>, BevexError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.catalog_error(format!("failed to read file: {e}")))?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut catalog = Vec::new();

        for result in rdr.records() {
            let record =
                result.map_err(|e| self.catalog_error(format!("CSV parse error: {e}")))?;

            let symbol = self.field(&record, 0, "symbol")?;
            let kind_name = self.field(&record, 1, "kind")?;
            let last_dividend = self.int_field(&record, 2, "last_dividend")?;

            let fixed_field = self.field(&record, 3, "fixed_dividend_percent")?;
            let fixed_dividend_percent = if fixed_field.is_empty() {
                None
            } else {
                Some(fixed_field.parse().map_err(|e| {
                    self.catalog_error(format!("invalid fixed_dividend_percent value: {e}"))
                })?)
            };

            let par_value = self.int_field(&record, 4, "par_value")?;

            let kind = SecurityKind::from_parts(kind_name, fixed_dividend_percent)
                .map_err(|e| self.catalog_error(format!("row {symbol}: {e}")))?;
            let security = Security::new(symbol, kind, last_dividend, par_value)
                .map_err(|e| self.catalog_error(format!("row {symbol}: {e}")))?;
            catalog.push(security);
        }

        Ok(catalog)
    }
}
