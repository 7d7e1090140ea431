//! SQLite storage implementation for snapshots.

mod model;
mod repository;

pub use model::SnapshotDB;
pub use repository::SnapshotRepository;
