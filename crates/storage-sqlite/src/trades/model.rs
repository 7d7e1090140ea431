//! Database model for trade positions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use moneta_core::errors::Error;
use moneta_core::trades::TradePosition;

/// Database model for trade positions.
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
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradePositionDB {
    pub id: String,
    pub symbol: String,
    pub average_cost: String,
    pub quantity: String,
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations

impl TryFrom<TradePositionDB> for TradePosition {
    type Error = Error;

    fn try_from(db: TradePositionDB) -> Result<Self, Error> {
        Ok(Self {
            id: db.id,
            symbol: db.symbol,
            average_cost: Decimal::from_str(&db.average_cost)?,
            quantity: Decimal::from_str(&db.quantity)?,
            currency: db.currency,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<TradePosition> for TradePositionDB {
    fn from(domain: TradePosition) -> Self {
        Self {
            id: domain.id,
            symbol: domain.symbol,
            average_cost: domain.average_cost.to_string(),
            quantity: domain.quantity.to_string(),
            currency: domain.currency,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
