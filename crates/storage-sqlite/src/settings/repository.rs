//! Settings repository.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::app_settings::dsl::*;

use moneta_core::errors::Result;
use moneta_core::settings::{Settings, SettingsRepositoryTrait};

/// Repository for the settings singleton, stored as key-value rows.
pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        let mut conn = get_connection(&self.pool)?;

        let rows: Vec<(String, String)> = app_settings
            .select((setting_key, setting_value))
            .load::<(String, String)>(&mut conn)
            .into_core()?;

        // Keys that have never been written keep their first-run defaults.
        let mut settings = Settings::default();
        for (key, value) in rows {
            match key.as_str() {
                "base_currency" => settings.base_currency = value,
                "theme" => settings.theme = value,
                "onboarding_completed" => {
                    settings.onboarding_completed = value.parse().unwrap_or(false);
                }
                _ => {} // Ignore unknown settings
            }
        }

        Ok(settings)
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        let rows = vec![
            AppSettingDB {
                setting_key: "base_currency".to_string(),
                setting_value: settings.base_currency.clone(),
            },
            AppSettingDB {
                setting_key: "theme".to_string(),
                setting_value: settings.theme.clone(),
            },
            AppSettingDB {
                setting_key: "onboarding_completed".to_string(),
                setting_value: settings.onboarding_completed.to_string(),
            },
        ];

        self.writer
            .exec(move |conn| {
                for row in &rows {
                    diesel::replace_into(app_settings)
                        .values(row)
                        .execute(conn)
                        .into_core()?;
                }
                Ok(())
            })
            .await
    }
}
