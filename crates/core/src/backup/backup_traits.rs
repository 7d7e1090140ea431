//! Backup service and store-maintenance traits.

use async_trait::async_trait;

use super::backup_model::BackupDocument;
use crate::errors::Result;

/// Trait for whole-store maintenance operations.
///
/// `clear_all` wipes every collection atomically from the caller's
/// perspective; it exists only for full-reset paths (backup import, user
/// reset) and is never used by normal writes.
#[async_trait]
pub trait StoreMaintenanceTrait: Send + Sync {
    async fn clear_all(&self) -> Result<()>;
}

/// Trait for the import/export surface.
#[async_trait]
pub trait BackupServiceTrait: Send + Sync {
    /// Reads every collection plus both singletons into one document.
    fn export_backup(&self) -> Result<BackupDocument>;

    /// Validates the document, wipes the store, and restores every record
    /// with ids and timestamps preserved.
    async fn import_backup(&self, document: BackupDocument) -> Result<()>;
}
