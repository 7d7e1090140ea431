//! Settings service.

use log::debug;
use std::sync::Arc;

use super::settings_model::{Settings, SettingsUpdate};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::Result;

/// Service for the settings singleton.
pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    /// Creates a new SettingsService instance.
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self {
            settings_repository,
        }
    }
}

#[async_trait::async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        self.settings_repository.get_settings()
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings> {
        let mut settings = self.settings_repository.get_settings()?;

        if let Some(ref base_currency) = update.base_currency {
            debug!("Switching base currency to {}", base_currency);
            settings.base_currency = base_currency.clone();
        }
        if let Some(ref theme) = update.theme {
            settings.theme = theme.clone();
        }
        if let Some(onboarding_completed) = update.onboarding_completed {
            settings.onboarding_completed = onboarding_completed;
        }

        self.settings_repository.save_settings(&settings).await?;
        Ok(settings)
    }

    fn get_base_currency(&self) -> Result<String> {
        Ok(self.settings_repository.get_settings()?.base_currency)
    }
}
