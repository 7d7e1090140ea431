//! Backup service - full-store export and restore.

use log::debug;
use std::sync::Arc;

use super::backup_model::BackupDocument;
use super::backup_traits::{BackupServiceTrait, StoreMaintenanceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::portfolio::snapshot::SnapshotRepositoryTrait;
use crate::profile::ProfileRepositoryTrait;
use crate::settings::SettingsRepositoryTrait;
use crate::trades::TradePositionRepositoryTrait;
use crate::transactions::TransactionRepositoryTrait;

/// Service for exporting and importing the full store.
pub struct BackupService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    trade_repository: Arc<dyn TradePositionRepositoryTrait>,
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
    maintenance: Arc<dyn StoreMaintenanceTrait>,
}

impl BackupService {
    /// Creates a new BackupService instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        trade_repository: Arc<dyn TradePositionRepositoryTrait>,
        snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
        profile_repository: Arc<dyn ProfileRepositoryTrait>,
        maintenance: Arc<dyn StoreMaintenanceTrait>,
    ) -> Self {
        Self {
            account_repository,
            transaction_repository,
            goal_repository,
            trade_repository,
            snapshot_repository,
            settings_repository,
            profile_repository,
            maintenance,
        }
    }
}

#[async_trait::async_trait]
impl BackupServiceTrait for BackupService {
    fn export_backup(&self) -> Result<BackupDocument> {
        debug!("Exporting full store to backup document");

        Ok(BackupDocument {
            profile: self.profile_repository.get_profile()?.unwrap_or_default(),
            settings: self.settings_repository.get_settings()?,
            portfolios: self.account_repository.get_all()?,
            transactions: self.transaction_repository.get_all()?,
            goals: self.goal_repository.get_all()?,
            trades: self.trade_repository.get_all()?,
            snapshots: self.snapshot_repository.get_all()?,
        })
    }

    async fn import_backup(&self, document: BackupDocument) -> Result<()> {
        debug!(
            "Importing backup: {} portfolios, {} transactions, {} goals, {} trades, {} snapshots",
            document.portfolios.len(),
            document.transactions.len(),
            document.goals.len(),
            document.trades.len(),
            document.snapshots.len()
        );

        // Nothing is wiped until the whole document is known good.
        document.validate()?;

        self.maintenance.clear_all().await?;

        // Parents before children, so a restored transaction never points
        // at a not-yet-restored account.
        for account in document.portfolios {
            self.account_repository.upsert(account).await?;
        }
        for transaction in document.transactions {
            self.transaction_repository.upsert(transaction).await?;
        }
        for goal in document.goals {
            self.goal_repository.upsert(goal).await?;
        }
        for trade in document.trades {
            self.trade_repository.upsert(trade).await?;
        }
        for snapshot in document.snapshots {
            self.snapshot_repository.upsert(snapshot).await?;
        }
        self.settings_repository
            .save_settings(&document.settings)
            .await?;
        self.profile_repository
            .save_profile(&document.profile)
            .await?;

        Ok(())
    }
}
