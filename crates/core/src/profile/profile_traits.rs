//! Profile repository and service traits.

use async_trait::async_trait;

use super::profile_model::{Profile, ProfileUpdate};
use crate::errors::Result;

/// Trait for profile repository operations.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    /// Returns the stored profile, or `None` before the first write.
    fn get_profile(&self) -> Result<Option<Profile>>;

    /// Writes the full profile singleton (upsert on the fixed row id).
    async fn save_profile(&self, profile: &Profile) -> Result<()>;
}

/// Trait for profile service operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    /// Returns the profile, falling back to defaults before the first write.
    fn get_profile(&self) -> Result<Profile>;

    /// Merges `update` into the current profile and persists the result.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile>;
}
