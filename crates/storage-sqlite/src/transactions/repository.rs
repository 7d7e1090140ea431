//! Transaction repository.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::transactions;
use crate::schema::transactions::dsl::*;

use super::model::TransactionDB;
use moneta_core::errors::Result;
use moneta_core::transactions::{Transaction, TransactionRepositoryTrait};

/// Repository for managing transaction data in the database.
pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn get_all(&self) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = transactions::table
            .select(TransactionDB::as_select())
            .order(occurred_at.desc())
            .load::<TransactionDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;

        let row = transactions
            .select(TransactionDB::as_select())
            .find(transaction_id)
            .first::<TransactionDB>(&mut conn)
            .into_core()?;

        row.try_into()
    }

    // Served by idx_transactions_account_id.
    fn get_by_account(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = transactions
            .select(TransactionDB::as_select())
            .filter(account_id.eq(owner_id))
            .order(occurred_at.desc())
            .load::<TransactionDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn upsert(&self, transaction: Transaction) -> Result<Transaction> {
        let record: TransactionDB = transaction.clone().into();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(transactions::table)
                    .values(&record)
                    .on_conflict(id)
                    .do_update()
                    .set(&record)
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await?;

        Ok(transaction)
    }

    async fn delete(&self, transaction_id: &str) -> Result<usize> {
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(transactions.find(transaction_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn delete_by_account(&self, owner_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(transactions.filter(account_id.eq(owner_id)))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
