//! EMI (equal-monthly-installment) remaining-balance projection.
//!
//! Pure calendar math over the four structural loan fields. The projection
//! is recomputed on every read - "today" advances continuously, so the
//! result is never cached or persisted as authoritative state.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::accounts::LoanTerms;
use crate::constants::DECIMAL_PRECISION;

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Builds a date in `year`/`month` on `day`, clamping the day to the month's
/// length (billing day 31 falls on Feb 29 in a leap year).
fn date_with_clamped_day(year: i32, month: u32, day: u32) -> NaiveDate {
    let clamped = day.min(days_in_month(year, month));
    // Day 1 always exists; clamped is within the month by construction.
    NaiveDate::from_ymd_opt(year, month, clamped)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).expect("month start exists"))
}

/// The calendar date on which the first installment is charged.
///
/// The first installment cannot be billed before a full billing cycle has
/// elapsed relative to the origination day: if the billing day falls on or
/// after the start date's day-of-month, the first billing is in the start
/// month; otherwise it slips to the following month.
pub fn first_billing_date(terms: &LoanTerms) -> NaiveDate {
    let start = terms.start_date;
    if terms.billing_day >= start.day() {
        date_with_clamped_day(start.year(), start.month(), terms.billing_day)
    } else {
        let (year, month) = if start.month() == 12 {
            (start.year() + 1, 1)
        } else {
            (start.year(), start.month() + 1)
        };
        date_with_clamped_day(year, month, terms.billing_day)
    }
}

/// Whole calendar months from `from` to `to` (`to >= from`).
fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to.year() as i64 - from.year() as i64) * 12 + (to.month() as i64 - from.month() as i64)
}

/// Number of installments charged as of `today` (whole calendar days;
/// time-of-day is already out of the picture with `NaiveDate` inputs).
pub fn payments_made(terms: &LoanTerms, today: NaiveDate) -> i64 {
    let first = first_billing_date(terms);
    if today < first {
        return 0;
    }

    let mut payments = months_between(first, today);
    if today.day() >= terms.billing_day {
        // The current month's installment has already been charged.
        payments += 1;
    }
    payments
}

/// Remaining balance of the loan as of `today`.
///
/// `max(0, principal - payments_made * monthly_installment)` - clamped so a
/// mis-entered schedule can never drive the balance negative.
pub fn remaining_balance(terms: &LoanTerms, today: NaiveDate) -> Decimal {
    let paid = Decimal::from(payments_made(terms, today)) * terms.monthly_installment;
    (terms.principal - paid)
        .max(Decimal::ZERO)
        .round_dp(DECIMAL_PRECISION)
}
