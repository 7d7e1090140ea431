//! Aggregate rollup over a set of accounts.

use chrono::NaiveDate;
use log::debug;

use super::rollup_model::AggregateTotals;
use crate::accounts::{Account, AccountCategory};
use crate::constants::DECIMAL_PRECISION;
use crate::fx::RateTable;

/// Rolls a set of accounts up into per-category totals in `target_currency`.
///
/// Each account contributes its effective value as of `today` - Loan
/// accounts go through the EMI projection, everything else uses the entered
/// nominal value - converted into the target currency. A missing rate
/// degrades to the unconverted amount so the totals stay finite.
pub fn rollup(
    accounts: &[Account],
    rates: &RateTable,
    target_currency: &str,
    today: NaiveDate,
) -> AggregateTotals {
    debug!(
        "Rolling up {} accounts into {}",
        accounts.len(),
        target_currency
    );

    let mut totals = AggregateTotals {
        currency: target_currency.to_string(),
        ..Default::default()
    };

    for account in accounts {
        let value = rates.convert_or_keep(
            account.value_as_of(today),
            &account.currency,
            target_currency,
        );

        match account.category {
            AccountCategory::Savings => totals.savings_total += value,
            AccountCategory::Investments => totals.investments_total += value,
            AccountCategory::Debts => totals.debt_total += value,
            AccountCategory::Loan => totals.loan_total += value,
        }
    }

    totals.savings_total = totals.savings_total.round_dp(DECIMAL_PRECISION);
    totals.investments_total = totals.investments_total.round_dp(DECIMAL_PRECISION);
    totals.debt_total = totals.debt_total.round_dp(DECIMAL_PRECISION);
    totals.loan_total = totals.loan_total.round_dp(DECIMAL_PRECISION);
    totals
}
