//! SQLite storage implementation for Moneta.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in `moneta-core`
//! and contains:
//! - Database connection pooling and lifecycle (pragmas, migrations)
//! - The single-writer actor all mutations funnel through
//! - Repository implementations for every domain entity
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place where Diesel dependencies exist;
//! `moneta-core` is database-agnostic and works entirely with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod goals;
pub mod maintenance;
pub mod profile;
pub mod settings;
pub mod snapshots;
pub mod trades;
pub mod transactions;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};
pub use db::{spawn_writer, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from moneta-core for convenience
pub use moneta_core::errors::{Error, Result};
