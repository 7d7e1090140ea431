//! Trade position repository and service traits.

use async_trait::async_trait;

use super::trades_model::{NewTradePosition, TradePosition, TradePositionUpdate};
use crate::errors::Result;

/// Trait for trade position repository operations.
#[async_trait]
pub trait TradePositionRepositoryTrait: Send + Sync {
    /// Lists all trade positions, ordered by symbol.
    fn get_all(&self) -> Result<Vec<TradePosition>>;

    /// Retrieves a trade position by its ID.
    fn get_by_id(&self, trade_id: &str) -> Result<TradePosition>;

    /// Creates or replaces a trade position keyed by its id.
    async fn upsert(&self, trade: TradePosition) -> Result<TradePosition>;

    /// Deletes a trade position by its ID; 0 rows if absent.
    async fn delete(&self, trade_id: &str) -> Result<usize>;
}

/// Trait for trade position service operations.
#[async_trait]
pub trait TradePositionServiceTrait: Send + Sync {
    async fn create_position(&self, new_trade: NewTradePosition) -> Result<TradePosition>;

    async fn update_position(&self, update: TradePositionUpdate) -> Result<TradePosition>;

    async fn delete_position(&self, trade_id: &str) -> Result<usize>;

    fn get_position(&self, trade_id: &str) -> Result<TradePosition>;

    fn get_all_positions(&self) -> Result<Vec<TradePosition>>;
}
