//! Trades module - independent trade positions and their valuation helpers.

mod trades_model;
mod trades_service;
mod trades_traits;

pub use trades_model::{NewTradePosition, TradePosition, TradePositionUpdate};
pub use trades_service::TradePositionService;
pub use trades_traits::{TradePositionRepositoryTrait, TradePositionServiceTrait};
