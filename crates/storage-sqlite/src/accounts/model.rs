//! Database model for accounts.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use moneta_core::accounts::{Account, AccountCategory, LoanTerms};
use moneta_core::errors::{Error, ValidationError};

/// Database model for accounts ("portfolios" on disk).
///
/// Monetary values persist as TEXT via `Decimal` string round-trips; the
/// loan terms flatten into four nullable columns that are all present or
/// all absent.
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
#[diesel(table_name = crate::schema::portfolios)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub name: String,
    pub category: String,
    pub currency: String,
    pub nominal_value: String,
    pub loan_principal: Option<String>,
    pub loan_monthly_installment: Option<String>,
    pub loan_start_date: Option<NaiveDate>,
    pub loan_billing_day: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn category_to_str(category: AccountCategory) -> &'static str {
    match category {
        AccountCategory::Savings => "SAVINGS",
        AccountCategory::Investments => "INVESTMENTS",
        AccountCategory::Debts => "DEBTS",
        AccountCategory::Loan => "LOAN",
    }
}

fn category_from_str(raw: &str) -> Result<AccountCategory, Error> {
    match raw {
        "SAVINGS" => Ok(AccountCategory::Savings),
        "INVESTMENTS" => Ok(AccountCategory::Investments),
        "DEBTS" => Ok(AccountCategory::Debts),
        "LOAN" => Ok(AccountCategory::Loan),
        other => Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Unknown account category '{}'",
            other
        )))),
    }
}

// Conversion implementations

impl TryFrom<AccountDB> for Account {
    type Error = Error;

    fn try_from(db: AccountDB) -> Result<Self, Error> {
        let loan = match (
            db.loan_principal,
            db.loan_monthly_installment,
            db.loan_start_date,
            db.loan_billing_day,
        ) {
            (Some(principal), Some(installment), Some(start_date), Some(billing_day)) => {
                Some(LoanTerms {
                    principal: Decimal::from_str(&principal)?,
                    monthly_installment: Decimal::from_str(&installment)?,
                    start_date,
                    billing_day: billing_day as u32,
                })
            }
            (None, None, None, None) => None,
            _ => {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Partial loan terms stored for account {}",
                    db.id
                ))))
            }
        };

        Ok(Self {
            id: db.id,
            name: db.name,
            category: category_from_str(&db.category)?,
            currency: db.currency,
            nominal_value: Decimal::from_str(&db.nominal_value)?,
            loan,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Account> for AccountDB {
    fn from(domain: Account) -> Self {
        let (principal, installment, start_date, billing_day) = match domain.loan {
            Some(terms) => (
                Some(terms.principal.to_string()),
                Some(terms.monthly_installment.to_string()),
                Some(terms.start_date),
                Some(terms.billing_day as i32),
            ),
            None => (None, None, None, None),
        };

        Self {
            id: domain.id,
            name: domain.name,
            category: category_to_str(domain.category).to_string(),
            currency: domain.currency,
            nominal_value: domain.nominal_value.to_string(),
            loan_principal: principal,
            loan_monthly_installment: installment,
            loan_start_date: start_date,
            loan_billing_day: billing_day,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
