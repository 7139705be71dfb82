//! Port traits for external collaborators.

pub mod catalog_port;
pub mod config_port;
