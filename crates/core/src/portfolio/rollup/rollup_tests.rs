//! Unit tests for the aggregate rollup.

use super::rollup_service::rollup;
use crate::accounts::{Account, AccountCategory, LoanTerms};
use crate::fx::RateTable;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn account(
    id: &str,
    category: AccountCategory,
    currency: &str,
    nominal_value: Decimal,
    loan: Option<LoanTerms>,
) -> Account {
    let now = NaiveDateTime::default();
    Account {
        id: id.to_string(),
        name: id.to_string(),
        category,
        currency: currency.to_string(),
        nominal_value,
        loan,
        created_at: now,
        updated_at: now,
    }
}

fn rates() -> RateTable {
    let mut rates = RateTable::new();
    rates.insert("EUR", "USD", dec!(1.1));
    rates.insert("USD", "EUR", dec!(0.909));
    rates
}

#[test]
fn test_rollup_sums_by_category_in_target_currency() {
    let accounts = vec![
        account("sav-usd", AccountCategory::Savings, "USD", dec!(1000), None),
        account("sav-eur", AccountCategory::Savings, "EUR", dec!(500), None),
        account("inv", AccountCategory::Investments, "USD", dec!(2000), None),
        account("debt", AccountCategory::Debts, "USD", dec!(300), None),
    ];

    let totals = rollup(&accounts, &rates(), "USD", date(2024, 6, 1));

    assert_eq!(totals.currency, "USD");
    assert_eq!(totals.savings_total, dec!(1550.0)); // 1000 + 500 * 1.1
    assert_eq!(totals.investments_total, dec!(2000));
    assert_eq!(totals.debt_total, dec!(300));
    assert_eq!(totals.loan_total, dec!(0));
    assert_eq!(totals.net_worth(), dec!(3250.0));
}

#[test]
fn test_rollup_projects_loan_accounts() {
    // 12000 principal, 1000/month since 2024-01-15, billed on the 10th:
    // by 2024-06-01 four installments (Feb-May) have been charged.
    let loan = account(
        "loan",
        AccountCategory::Loan,
        "USD",
        dec!(999999), // stored nominal value is never trusted for loans
        Some(LoanTerms {
            principal: dec!(12000),
            monthly_installment: dec!(1000),
            start_date: date(2024, 1, 15),
            billing_day: 10,
        }),
    );
    let savings = account("sav", AccountCategory::Savings, "USD", dec!(5000), None);

    let totals = rollup(&[loan, savings], &rates(), "USD", date(2024, 6, 1));

    assert_eq!(totals.loan_total, dec!(8000));
    assert_eq!(totals.net_worth(), dec!(-3000));
}

#[test]
fn test_rollup_missing_rate_keeps_raw_amount() {
    let accounts = vec![account(
        "sav-jpy",
        AccountCategory::Savings,
        "JPY",
        dec!(10000),
        None,
    )];

    let totals = rollup(&accounts, &rates(), "USD", date(2024, 6, 1));
    assert_eq!(totals.savings_total, dec!(10000));
}

#[test]
fn test_allocation_consistent_with_net_worth_formula() {
    let accounts = vec![
        account("sav", AccountCategory::Savings, "USD", dec!(600), None),
        account("inv", AccountCategory::Investments, "USD", dec!(400), None),
        account("debt", AccountCategory::Debts, "USD", dec!(250), None),
    ];

    let totals = rollup(&accounts, &rates(), "USD", date(2024, 6, 1));
    let allocation = totals.allocation();

    assert_eq!(allocation.savings_percent, dec!(60.00));
    assert_eq!(allocation.investments_percent, dec!(40.00));
    assert_eq!(allocation.debt_percent, dec!(25.00));
    // Asset percentages cover the base exactly; no double counting.
    assert_eq!(
        allocation.savings_percent + allocation.investments_percent,
        dec!(100.00)
    );
}

#[test]
fn test_allocation_all_zero_reports_zero_percent() {
    let totals = rollup(&[], &rates(), "USD", date(2024, 6, 1));
    let allocation = totals.allocation();

    assert_eq!(allocation.savings_percent, Decimal::ZERO);
    assert_eq!(allocation.investments_percent, Decimal::ZERO);
    assert_eq!(allocation.debt_percent, Decimal::ZERO);
    assert_eq!(allocation.loan_percent, Decimal::ZERO);
    assert_eq!(totals.net_worth(), Decimal::ZERO);
}
