//! bevex — Global Beverage Corporation Exchange trading simulator.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], interactive surface in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
