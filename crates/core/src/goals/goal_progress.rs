//! Goal progress math.
//!
//! Pure functions over already-fetched values; no repository access and no
//! hidden state.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::goals_model::Goal;
use crate::accounts::Account;
use crate::constants::{DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION};
use crate::fx::RateTable;

/// Progress of a goal against its linked accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    /// Sum of linked account values in the goal's currency.
    pub current_total: Decimal,
    pub target_amount: Decimal,
    /// Clamped to [0, 100] regardless of overshoot or a non-positive target.
    pub percent: Decimal,
}

/// Computes the progress of `goal` from its resolved linked accounts.
///
/// Loan accounts contribute their projected remaining balance as of `today`;
/// every value is converted into the goal's currency, with a missing rate
/// degrading to the unconverted amount. Numeric edge cases clamp, never
/// error: overshoot caps at 100% and a non-positive target reports 0%.
pub fn goal_progress(
    goal: &Goal,
    linked_accounts: &[Account],
    rates: &RateTable,
    today: NaiveDate,
) -> GoalProgress {
    let current_total: Decimal = linked_accounts
        .iter()
        .map(|account| {
            rates.convert_or_keep(account.value_as_of(today), &account.currency, &goal.currency)
        })
        .sum();
    let current_total = current_total.round_dp(DECIMAL_PRECISION);

    let percent = if goal.target_amount <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        (current_total / goal.target_amount * Decimal::ONE_HUNDRED)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    };

    GoalProgress {
        goal_id: goal.id.clone(),
        current_total,
        target_amount: goal.target_amount,
        percent,
    }
}
