//! Settings repository and service traits.

use async_trait::async_trait;

use super::settings_model::{Settings, SettingsUpdate};
use crate::errors::Result;

/// Trait for settings repository operations.
///
/// Implementations return defaults for keys that have never been written;
/// a storage fault is still an error, never silently defaulted.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    /// Writes the full settings singleton.
    async fn save_settings(&self, settings: &Settings) -> Result<()>;
}

/// Trait for settings service operations.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    /// Merges `update` into the current settings and persists the result.
    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings>;

    fn get_base_currency(&self) -> Result<String>;
}
