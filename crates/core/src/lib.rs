//! Moneta Core - Domain entities, services, and valuation.
//!
//! This crate contains the core business logic for Moneta.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod accounts;
pub mod backup;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod goals;
pub mod portfolio;
pub mod profile;
pub mod settings;
pub mod trades;
pub mod transactions;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
