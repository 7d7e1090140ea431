//! Snapshot repository.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::snapshots;
use crate::schema::snapshots::dsl::*;

use super::model::SnapshotDB;
use moneta_core::errors::Result;
use moneta_core::portfolio::snapshot::{Snapshot, SnapshotRepositoryTrait};

/// Repository for managing snapshot data in the database.
pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    /// Creates a new SnapshotRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    fn get_all(&self) -> Result<Vec<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = snapshots::table
            .select(SnapshotDB::as_select())
            .order(captured_at.asc())
            .load::<SnapshotDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(Snapshot::try_from).collect()
    }

    async fn upsert(&self, snapshot: Snapshot) -> Result<Snapshot> {
        let record: SnapshotDB = snapshot.clone().into();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(snapshots::table)
                    .values(&record)
                    .on_conflict(id)
                    .do_update()
                    .set(&record)
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await?;

        Ok(snapshot)
    }

    async fn delete(&self, snapshot_id: &str) -> Result<usize> {
        let snapshot_id = snapshot_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(snapshots.find(snapshot_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
