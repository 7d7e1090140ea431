//! Profile service.

use chrono::Utc;
use std::sync::Arc;

use super::profile_model::{Profile, ProfileUpdate};
use super::profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::errors::Result;

/// Service for the profile singleton.
pub struct ProfileService {
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
}

impl ProfileService {
    /// Creates a new ProfileService instance.
    pub fn new(profile_repository: Arc<dyn ProfileRepositoryTrait>) -> Self {
        Self { profile_repository }
    }
}

#[async_trait::async_trait]
impl ProfileServiceTrait for ProfileService {
    fn get_profile(&self) -> Result<Profile> {
        Ok(self.profile_repository.get_profile()?.unwrap_or_default())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile> {
        let now = Utc::now().naive_utc();
        let mut profile = match self.profile_repository.get_profile()? {
            Some(existing) => existing,
            None => Profile {
                created_at: now,
                ..Profile::default()
            },
        };

        if let Some(ref display_name) = update.display_name {
            profile.display_name = display_name.clone();
        }
        if let Some(ref email) = update.email {
            profile.email = Some(email.clone());
        }
        profile.updated_at = now;

        self.profile_repository.save_profile(&profile).await?;
        Ok(profile)
    }
}
