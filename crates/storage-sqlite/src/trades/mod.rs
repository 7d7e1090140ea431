//! SQLite storage implementation for trade positions.

mod model;
mod repository;

pub use model::TradePositionDB;
pub use repository::TradePositionRepository;
