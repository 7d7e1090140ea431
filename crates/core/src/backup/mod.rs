//! Backup module - full-store export/import as a single JSON document.

mod backup_model;
mod backup_service;
mod backup_traits;

pub use backup_model::BackupDocument;
pub use backup_service::BackupService;
pub use backup_traits::{BackupServiceTrait, StoreMaintenanceTrait};

#[cfg(test)]
mod backup_service_tests;
