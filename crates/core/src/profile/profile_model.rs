//! Profile domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// User profile singleton.
///
/// A single row with a fixed id; created on first write, updated in place,
/// deleted only on a full store wipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub display_name: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Default for Profile {
    fn default() -> Self {
        let now = NaiveDateTime::default();
        Self {
            display_name: String::new(),
            email: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for the profile singleton; `None` fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
}
