//! Whole-store maintenance operations.

use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;

use crate::db::WriteHandle;
use crate::errors::IntoCore;
use crate::schema::{app_settings, goals, portfolios, profile, snapshots, trades, transactions};

use moneta_core::backup::StoreMaintenanceTrait;
use moneta_core::errors::Result;

/// Implements the full-reset path: every collection wiped in one
/// writer-actor transaction, children before parents.
pub struct MaintenanceRepository {
    writer: WriteHandle,
}

impl MaintenanceRepository {
    /// Creates a new MaintenanceRepository instance.
    pub fn new(writer: WriteHandle) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl StoreMaintenanceTrait for MaintenanceRepository {
    async fn clear_all(&self) -> Result<()> {
        debug!("Wiping every collection in the store");

        self.writer
            .exec(move |conn| {
                diesel::delete(transactions::table).execute(conn).into_core()?;
                diesel::delete(goals::table).execute(conn).into_core()?;
                diesel::delete(trades::table).execute(conn).into_core()?;
                diesel::delete(snapshots::table).execute(conn).into_core()?;
                diesel::delete(portfolios::table).execute(conn).into_core()?;
                diesel::delete(app_settings::table).execute(conn).into_core()?;
                diesel::delete(profile::table).execute(conn).into_core()?;
                Ok(())
            })
            .await
    }
}
