//! Database model for transactions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use moneta_core::errors::{Error, ValidationError};
use moneta_core::transactions::{Direction, Transaction};

/// Database model for transactions.
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
#[diesel(table_name = crate::schema::transactions)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub account_id: String,
    pub amount: String,
    pub direction: String,
    pub category: String,
    pub note: Option<String>,
    pub occurred_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn direction_to_str(direction: Direction) -> &'static str {
    match direction {
        Direction::Inflow => "INFLOW",
        Direction::Outflow => "OUTFLOW",
    }
}

fn direction_from_str(raw: &str) -> Result<Direction, Error> {
    match raw {
        "INFLOW" => Ok(Direction::Inflow),
        "OUTFLOW" => Ok(Direction::Outflow),
        other => Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Unknown transaction direction '{}'",
            other
        )))),
    }
}

// Conversion implementations

impl TryFrom<TransactionDB> for Transaction {
    type Error = Error;

    fn try_from(db: TransactionDB) -> Result<Self, Error> {
        Ok(Self {
            id: db.id,
            account_id: db.account_id,
            amount: Decimal::from_str(&db.amount)?,
            direction: direction_from_str(&db.direction)?,
            category: db.category,
            note: db.note,
            occurred_at: db.occurred_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Transaction> for TransactionDB {
    fn from(domain: Transaction) -> Self {
        Self {
            id: domain.id,
            account_id: domain.account_id,
            amount: domain.amount.to_string(),
            direction: direction_to_str(domain.direction).to_string(),
            category: domain.category,
            note: domain.note,
            occurred_at: domain.occurred_at,
            updated_at: domain.updated_at,
        }
    }
}
