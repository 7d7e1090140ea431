//! Snapshot module - immutable point-in-time records of aggregate totals.

mod snapshot_model;
mod snapshot_service;
mod snapshot_traits;

pub use snapshot_model::Snapshot;
pub use snapshot_service::SnapshotService;
pub use snapshot_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};
