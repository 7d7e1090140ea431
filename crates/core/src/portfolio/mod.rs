//! Portfolio module - loan projection, aggregate rollup, and snapshots.

pub mod loans;
pub mod rollup;
pub mod snapshot;

pub use rollup::{rollup, AggregateTotals, Allocation};
pub use snapshot::{Snapshot, SnapshotRepositoryTrait, SnapshotService, SnapshotServiceTrait};
