//! Trade position domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DECIMAL_PRECISION;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a trade position.
///
/// Positions have no ownership relation to accounts; their valuation is
/// compared against a live price supplied by the market-data collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradePosition {
    pub id: String,
    pub symbol: String,
    pub average_cost: Decimal,
    pub quantity: Decimal,
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TradePosition {
    /// Total acquisition cost of the position.
    pub fn cost_basis(&self) -> Decimal {
        (self.quantity * self.average_cost).round_dp(DECIMAL_PRECISION)
    }

    /// Current market value at the supplied live price.
    pub fn market_value(&self, live_price: Decimal) -> Decimal {
        (self.quantity * live_price).round_dp(DECIMAL_PRECISION)
    }

    /// Unrealized gain (or loss, when negative) at the supplied live price.
    pub fn unrealized_gain(&self, live_price: Decimal) -> Decimal {
        self.market_value(live_price) - self.cost_basis()
    }
}

/// Input model for creating a new trade position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTradePosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub symbol: String,
    pub average_cost: Decimal,
    pub quantity: Decimal,
    pub currency: String,
}

impl NewTradePosition {
    /// Validates the new trade position data.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Symbol cannot be empty".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Currency cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing trade position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePositionUpdate {
    pub id: Option<String>,
    pub symbol: String,
    pub average_cost: Decimal,
    pub quantity: Decimal,
    pub currency: String,
}

impl TradePositionUpdate {
    /// Validates the trade position update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Trade position ID is required for updates".to_string(),
            )));
        }
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Symbol cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
