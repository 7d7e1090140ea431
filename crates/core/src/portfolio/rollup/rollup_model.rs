//! Rollup domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Per-category totals in a single target currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AggregateTotals {
    pub currency: String,
    pub savings_total: Decimal,
    pub investments_total: Decimal,
    pub debt_total: Decimal,
    /// Projected remaining loan balances, not the entered nominal values.
    pub loan_total: Decimal,
}

impl AggregateTotals {
    /// Net worth: assets minus liabilities.
    pub fn net_worth(&self) -> Decimal {
        self.savings_total + self.investments_total - self.debt_total - self.loan_total
    }

    /// Allocation percentages against the asset base (savings + investments).
    pub fn allocation(&self) -> Allocation {
        // Floor the denominator at 1 so an all-zero book reports 0%, not NaN.
        let base = (self.savings_total + self.investments_total).max(Decimal::ONE);
        let percent = |total: Decimal| {
            (total / base * Decimal::ONE_HUNDRED).round_dp(DISPLAY_DECIMAL_PRECISION)
        };

        Allocation {
            savings_percent: percent(self.savings_total),
            investments_percent: percent(self.investments_total),
            debt_percent: percent(self.debt_total),
            loan_percent: percent(self.loan_total),
        }
    }
}

/// Category shares of the asset base, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub savings_percent: Decimal,
    pub investments_percent: Decimal,
    pub debt_percent: Decimal,
    pub loan_percent: Decimal,
}
