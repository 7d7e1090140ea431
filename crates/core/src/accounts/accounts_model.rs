//! Account domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::loans;
use crate::{errors::ValidationError, Error, Result};

/// Category of an account - determines how its value enters the rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountCategory {
    #[default]
    Savings,
    Investments,
    Debts,
    Loan,
}

/// Structural terms of an installment loan.
///
/// These four fields are the only authoritative loan state; the remaining
/// balance is always projected from them, never read back from storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub principal: Decimal,
    pub monthly_installment: Decimal,
    pub start_date: NaiveDate,
    /// Day of month (1-31) on which each installment is charged.
    pub billing_day: u32,
}

impl LoanTerms {
    pub fn validate(&self) -> Result<()> {
        if !(1..=31).contains(&self.billing_day) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Billing day must be between 1 and 31, got {}",
                self.billing_day
            ))));
        }
        Ok(())
    }
}

/// Domain model representing an account (a tracked financial holding).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub category: AccountCategory,
    pub currency: String,
    /// Entered value in the account's own currency. For Loan accounts this
    /// field is advisory only - every derived read goes through
    /// [`Account::value_as_of`], which projects the remaining balance fresh.
    pub nominal_value: Decimal,
    /// Present iff `category` is `Loan`.
    pub loan: Option<LoanTerms>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Account {
    /// Effective value of the account as of `today`, in the account's
    /// own currency.
    ///
    /// Loan accounts never trust the stored `nominal_value`; the remaining
    /// balance is recomputed from the loan terms on every call because
    /// "today" advances continuously.
    pub fn value_as_of(&self, today: NaiveDate) -> Decimal {
        match (&self.category, &self.loan) {
            (AccountCategory::Loan, Some(terms)) => loans::remaining_balance(terms, today),
            _ => self.nominal_value,
        }
    }

    /// Validates a persisted record, used when records arrive from outside
    /// the usual input models (backup restore).
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        validate_category_loan_match(self.category, &self.loan)
    }
}

fn validate_category_loan_match(
    category: AccountCategory,
    loan: &Option<LoanTerms>,
) -> Result<()> {
    match (category, loan) {
        (AccountCategory::Loan, None) => Err(Error::Validation(ValidationError::MissingField(
            "loan".to_string(),
        ))),
        (AccountCategory::Loan, Some(terms)) => terms.validate(),
        (_, Some(_)) => Err(Error::Validation(ValidationError::InvalidInput(
            "Loan terms are only valid on Loan accounts".to_string(),
        ))),
        (_, None) => Ok(()),
    }
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: AccountCategory,
    pub currency: String,
    pub nominal_value: Decimal,
    pub loan: Option<LoanTerms>,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Currency cannot be empty".to_string(),
            )));
        }
        validate_category_loan_match(self.category, &self.loan)
    }
}

/// Input model for updating an existing account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: Option<String>,
    pub name: String,
    pub category: AccountCategory,
    pub currency: String,
    pub nominal_value: Decimal,
    pub loan: Option<LoanTerms>,
}

impl AccountUpdate {
    /// Validates the account update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Currency cannot be empty".to_string(),
            )));
        }
        validate_category_loan_match(self.category, &self.loan)
    }
}
