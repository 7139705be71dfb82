//! Concrete implementations of the port traits.

pub mod builtin_catalog;
pub mod csv_catalog_adapter;
pub mod file_config_adapter;
