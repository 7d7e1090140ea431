//! Snapshot recorder.

use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::snapshot_model::Snapshot;
use super::snapshot_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};
use crate::errors::Result;
use crate::portfolio::rollup::AggregateTotals;

/// Service that records aggregate totals as immutable snapshots.
pub struct SnapshotService {
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl SnapshotService {
    /// Creates a new SnapshotService instance.
    pub fn new(snapshot_repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        Self {
            snapshot_repository,
        }
    }
}

#[async_trait::async_trait]
impl SnapshotServiceTrait for SnapshotService {
    async fn capture(&self, totals: AggregateTotals) -> Result<Snapshot> {
        debug!(
            "Capturing snapshot in {} (net worth {})",
            totals.currency,
            totals.net_worth()
        );

        let snapshot = Snapshot {
            id: Uuid::new_v4().to_string(),
            captured_at: Utc::now().naive_utc(),
            currency: totals.currency,
            savings_total: totals.savings_total,
            investments_total: totals.investments_total,
            debt_total: totals.debt_total,
            loan_total: totals.loan_total,
        };

        self.snapshot_repository.upsert(snapshot).await
    }

    fn list(&self) -> Result<Vec<Snapshot>> {
        self.snapshot_repository.get_all()
    }

    async fn delete(&self, snapshot_id: &str) -> Result<usize> {
        self.snapshot_repository.delete(snapshot_id).await
    }
}
