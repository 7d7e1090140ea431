//! Database model for goals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::StorageError;
use moneta_core::errors::Error;
use moneta_core::goals::Goal;

/// Database model for goals.
///
/// The weak account references persist as a JSON array in a TEXT column.
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
#[diesel(table_name = crate::schema::goals)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub name: String,
    pub target_amount: String,
    pub currency: String,
    pub linked_account_ids: String,
    pub deadline: Option<NaiveDate>,
    pub color_tag: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations

impl TryFrom<GoalDB> for Goal {
    type Error = Error;

    fn try_from(db: GoalDB) -> Result<Self, Error> {
        let linked: Vec<String> = serde_json::from_str(&db.linked_account_ids)
            .map_err(|e| Error::from(StorageError::SerializationError(e.to_string())))?;

        Ok(Self {
            id: db.id,
            name: db.name,
            target_amount: Decimal::from_str(&db.target_amount)?,
            currency: db.currency,
            linked_account_ids: linked,
            deadline: db.deadline,
            color_tag: db.color_tag,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl TryFrom<Goal> for GoalDB {
    type Error = Error;

    fn try_from(domain: Goal) -> Result<Self, Error> {
        let linked = serde_json::to_string(&domain.linked_account_ids)
            .map_err(|e| Error::from(StorageError::SerializationError(e.to_string())))?;

        Ok(Self {
            id: domain.id,
            name: domain.name,
            target_amount: domain.target_amount.to_string(),
            currency: domain.currency,
            linked_account_ids: linked,
            deadline: domain.deadline,
            color_tag: domain.color_tag,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        })
    }
}
