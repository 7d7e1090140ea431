//! Database model for the profile singleton.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use moneta_core::constants::PROFILE_SINGLETON_ID;
use moneta_core::profile::Profile;

/// Database model for the profile singleton (one row, fixed id).
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::profile)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProfileDB {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations

impl From<ProfileDB> for Profile {
    fn from(db: ProfileDB) -> Self {
        Self {
            display_name: db.display_name,
            email: db.email,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Profile> for ProfileDB {
    fn from(domain: Profile) -> Self {
        Self {
            id: PROFILE_SINGLETON_ID.to_string(),
            display_name: domain.display_name,
            email: domain.email,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
