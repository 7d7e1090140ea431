//! Profile repository.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::profile;
use crate::schema::profile::dsl::*;

use super::model::ProfileDB;
use moneta_core::constants::PROFILE_SINGLETON_ID;
use moneta_core::errors::Result;
use moneta_core::profile::{Profile, ProfileRepositoryTrait};

/// Repository for the profile singleton.
pub struct ProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfileRepository {
    /// Creates a new ProfileRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn get_profile(&self) -> Result<Option<Profile>> {
        let mut conn = get_connection(&self.pool)?;

        let row = profile
            .select(ProfileDB::as_select())
            .find(PROFILE_SINGLETON_ID)
            .first::<ProfileDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(row.map(Profile::from))
    }

    async fn save_profile(&self, value: &Profile) -> Result<()> {
        let record: ProfileDB = value.clone().into();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(profile::table)
                    .values(&record)
                    .on_conflict(id)
                    .do_update()
                    .set(&record)
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await
    }
}
