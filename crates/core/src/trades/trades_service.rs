//! Trade position service.

use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::trades_model::{NewTradePosition, TradePosition, TradePositionUpdate};
use super::trades_traits::{TradePositionRepositoryTrait, TradePositionServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing trade positions.
pub struct TradePositionService {
    trade_repository: Arc<dyn TradePositionRepositoryTrait>,
}

impl TradePositionService {
    /// Creates a new TradePositionService instance.
    pub fn new(trade_repository: Arc<dyn TradePositionRepositoryTrait>) -> Self {
        Self { trade_repository }
    }
}

#[async_trait::async_trait]
impl TradePositionServiceTrait for TradePositionService {
    async fn create_position(&self, new_trade: NewTradePosition) -> Result<TradePosition> {
        new_trade.validate()?;
        debug!(
            "Creating position {} x {} in {}",
            new_trade.quantity, new_trade.symbol, new_trade.currency
        );

        let now = Utc::now().naive_utc();
        let trade = TradePosition {
            id: new_trade.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            symbol: new_trade.symbol,
            average_cost: new_trade.average_cost,
            quantity: new_trade.quantity,
            currency: new_trade.currency,
            created_at: now,
            updated_at: now,
        };

        self.trade_repository.upsert(trade).await
    }

    async fn update_position(&self, update: TradePositionUpdate) -> Result<TradePosition> {
        update.validate()?;

        let id = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;
        let existing = self.trade_repository.get_by_id(&id)?;

        let trade = TradePosition {
            id,
            symbol: update.symbol,
            average_cost: update.average_cost,
            quantity: update.quantity,
            currency: update.currency,
            created_at: existing.created_at,
            updated_at: Utc::now().naive_utc(),
        };

        self.trade_repository.upsert(trade).await
    }

    async fn delete_position(&self, trade_id: &str) -> Result<usize> {
        self.trade_repository.delete(trade_id).await
    }

    fn get_position(&self, trade_id: &str) -> Result<TradePosition> {
        self.trade_repository.get_by_id(trade_id)
    }

    fn get_all_positions(&self) -> Result<Vec<TradePosition>> {
        self.trade_repository.get_all()
    }
}
