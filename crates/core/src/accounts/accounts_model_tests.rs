//! Unit tests for account models.

use super::accounts_model::{Account, AccountCategory, LoanTerms, NewAccount};
use crate::errors::Error;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn loan_terms() -> LoanTerms {
    LoanTerms {
        principal: dec!(12000),
        monthly_installment: dec!(1000),
        start_date: date(2024, 1, 15),
        billing_day: 10,
    }
}

fn new_account(category: AccountCategory, loan: Option<LoanTerms>) -> NewAccount {
    NewAccount {
        id: None,
        name: "Emergency fund".to_string(),
        category,
        currency: "USD".to_string(),
        nominal_value: dec!(1000),
        loan,
    }
}

#[test]
fn test_validate_rejects_empty_name() {
    let mut input = new_account(AccountCategory::Savings, None);
    input.name = "  ".to_string();
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
}

#[test]
fn test_validate_requires_loan_terms_on_loan_accounts() {
    let input = new_account(AccountCategory::Loan, None);
    assert!(matches!(input.validate(), Err(Error::Validation(_))));

    let input = new_account(AccountCategory::Loan, Some(loan_terms()));
    assert!(input.validate().is_ok());
}

#[test]
fn test_validate_rejects_loan_terms_on_other_categories() {
    let input = new_account(AccountCategory::Savings, Some(loan_terms()));
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
}

#[test]
fn test_validate_rejects_billing_day_out_of_range() {
    let mut terms = loan_terms();
    terms.billing_day = 0;
    let input = new_account(AccountCategory::Loan, Some(terms));
    assert!(matches!(input.validate(), Err(Error::Validation(_))));

    let mut terms = loan_terms();
    terms.billing_day = 32;
    let input = new_account(AccountCategory::Loan, Some(terms));
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
}

#[test]
fn test_value_as_of_uses_nominal_value_for_non_loans() {
    let now = NaiveDateTime::default();
    let account = Account {
        id: "a".to_string(),
        name: "Savings".to_string(),
        category: AccountCategory::Savings,
        currency: "USD".to_string(),
        nominal_value: dec!(1234.56),
        loan: None,
        created_at: now,
        updated_at: now,
    };
    assert_eq!(account.value_as_of(date(2024, 6, 1)), dec!(1234.56));
}

#[test]
fn test_value_as_of_ignores_stored_nominal_value_for_loans() {
    let now = NaiveDateTime::default();
    let account = Account {
        id: "l".to_string(),
        name: "Car loan".to_string(),
        category: AccountCategory::Loan,
        currency: "USD".to_string(),
        // A stale persisted copy must never leak into derived reads.
        nominal_value: dec!(999999),
        loan: Some(loan_terms()),
        created_at: now,
        updated_at: now,
    };
    // Four installments charged by 2024-06-01 (Feb 10 .. May 10).
    assert_eq!(account.value_as_of(date(2024, 6, 1)), dec!(8000));
}
