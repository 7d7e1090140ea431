//! Database model for snapshots.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use moneta_core::errors::Error;
use moneta_core::portfolio::snapshot::Snapshot;

/// Database model for snapshots.
///
/// Rows are written once and never updated; the four totals persist as TEXT.
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
#[diesel(table_name = crate::schema::snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotDB {
    pub id: String,
    pub captured_at: NaiveDateTime,
    pub currency: String,
    pub savings_total: String,
    pub investments_total: String,
    pub debt_total: String,
    pub loan_total: String,
}

// Conversion implementations

impl TryFrom<SnapshotDB> for Snapshot {
    type Error = Error;

    fn try_from(db: SnapshotDB) -> Result<Self, Error> {
        Ok(Self {
            id: db.id,
            captured_at: db.captured_at,
            currency: db.currency,
            savings_total: Decimal::from_str(&db.savings_total)?,
            investments_total: Decimal::from_str(&db.investments_total)?,
            debt_total: Decimal::from_str(&db.debt_total)?,
            loan_total: Decimal::from_str(&db.loan_total)?,
        })
    }
}

impl From<Snapshot> for SnapshotDB {
    fn from(domain: Snapshot) -> Self {
        Self {
            id: domain.id,
            captured_at: domain.captured_at,
            currency: domain.currency,
            savings_total: domain.savings_total.to_string(),
            investments_total: domain.investments_total.to_string(),
            debt_total: domain.debt_total.to_string(),
            loan_total: domain.loan_total.to_string(),
        }
    }
}
