//! Snapshot repository and service traits.

use async_trait::async_trait;

use super::snapshot_model::Snapshot;
use crate::errors::Result;
use crate::portfolio::rollup::AggregateTotals;

/// Trait for snapshot repository operations.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Lists all snapshots ordered by `captured_at` ascending.
    fn get_all(&self) -> Result<Vec<Snapshot>>;

    /// Creates or replaces a snapshot keyed by its id.
    async fn upsert(&self, snapshot: Snapshot) -> Result<Snapshot>;

    /// Deletes a snapshot by its ID; 0 rows if absent.
    async fn delete(&self, snapshot_id: &str) -> Result<usize>;
}

/// Trait for the snapshot recorder.
///
/// The recorder only persists pre-computed totals; it never recomputes them
/// and never mutates an existing snapshot.
#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    /// Persists `totals` as a new snapshot with a fresh id and the current
    /// timestamp.
    async fn capture(&self, totals: AggregateTotals) -> Result<Snapshot>;

    /// Lists all snapshots ordered by capture time.
    fn list(&self) -> Result<Vec<Snapshot>>;

    /// Deletes a snapshot (explicit user action only).
    async fn delete(&self, snapshot_id: &str) -> Result<usize>;
}
