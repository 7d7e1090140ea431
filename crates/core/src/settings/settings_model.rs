//! Settings domain models.

use serde::{Deserialize, Serialize};

/// Application settings singleton.
///
/// Created with first-run defaults, updated in place, never deleted except
/// on a full store wipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub base_currency: String,
    pub theme: String,
    pub onboarding_completed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_currency: "USD".to_string(),
            theme: "light".to_string(),
            onboarding_completed: false,
        }
    }
}

/// Partial update for the settings singleton; `None` fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub base_currency: Option<String>,
    pub theme: Option<String>,
    pub onboarding_completed: Option<bool>,
}
