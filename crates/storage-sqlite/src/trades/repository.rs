//! Trade position repository.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::trades;
use crate::schema::trades::dsl::*;

use super::model::TradePositionDB;
use moneta_core::errors::Result;
use moneta_core::trades::{TradePosition, TradePositionRepositoryTrait};

/// Repository for managing trade position data in the database.
pub struct TradePositionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TradePositionRepository {
    /// Creates a new TradePositionRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TradePositionRepositoryTrait for TradePositionRepository {
    fn get_all(&self) -> Result<Vec<TradePosition>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = trades::table
            .select(TradePositionDB::as_select())
            .order(symbol.asc())
            .load::<TradePositionDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(TradePosition::try_from).collect()
    }

    fn get_by_id(&self, trade_id: &str) -> Result<TradePosition> {
        let mut conn = get_connection(&self.pool)?;

        let row = trades
            .select(TradePositionDB::as_select())
            .find(trade_id)
            .first::<TradePositionDB>(&mut conn)
            .into_core()?;

        row.try_into()
    }

    async fn upsert(&self, trade: TradePosition) -> Result<TradePosition> {
        let record: TradePositionDB = trade.clone().into();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(trades::table)
                    .values(&record)
                    .on_conflict(id)
                    .do_update()
                    .set(&record)
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await?;

        Ok(trade)
    }

    async fn delete(&self, trade_id: &str) -> Result<usize> {
        let trade_id = trade_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(trades.find(trade_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
