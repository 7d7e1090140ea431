//! Rate table and conversion.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::fx_errors::FxError;

/// Multiplicative conversion factors supplied by the market-rate collaborator.
///
/// Maps each source currency to a map of target currencies and factors.
/// A self-rate entry (factor 1) is permitted but never required; the table
/// is assumed internally consistent and no cross-rate or round-trip
/// correction is performed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RateTable(pub HashMap<String, HashMap<String, Decimal>>);

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single conversion factor.
    pub fn insert(&mut self, from: &str, to: &str, rate: Decimal) {
        self.0
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), rate);
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Identity conversions never consult the table, so `convert(v, A, A) = v`
    /// holds even for currencies the collaborator has not supplied.
    pub fn convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
    ) -> std::result::Result<Decimal, FxError> {
        if from == to {
            return Ok(amount);
        }

        self.0
            .get(from)
            .and_then(|targets| targets.get(to))
            .map(|rate| amount * rate)
            .ok_or_else(|| FxError::RateNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Converts `amount`, degrading to the unconverted amount when the pair
    /// is missing from the table.
    ///
    /// This is the fallback used by aggregate rollups: a gap in the rate
    /// table must not make a total unrepresentable, so the raw amount is
    /// carried through and the gap is logged.
    pub fn convert_or_keep(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        match self.convert(amount, from, to) {
            Ok(converted) => converted,
            Err(FxError::RateNotFound { .. }) => {
                warn!(
                    "Missing FX rate {}->{}, using unconverted amount",
                    from, to
                );
                amount
            }
        }
    }
}
