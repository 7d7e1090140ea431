//! Snapshot domain model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An immutable record of aggregate totals at a point in time.
///
/// Captured for historical trend charts; never mutated after creation and
/// deleted only by explicit user action or a full store wipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub captured_at: NaiveDateTime,
    pub currency: String,
    pub savings_total: Decimal,
    pub investments_total: Decimal,
    pub debt_total: Decimal,
    pub loan_total: Decimal,
}
