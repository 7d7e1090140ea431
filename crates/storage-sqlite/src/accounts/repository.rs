//! Account repository.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::portfolios;
use crate::schema::portfolios::dsl::*;

use super::model::AccountDB;
use moneta_core::accounts::{Account, AccountRepositoryTrait};
use moneta_core::errors::Result;

/// Repository for managing account data in the database.
pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    fn get_all(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = portfolios::table
            .select(AccountDB::as_select())
            .order(name.asc())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(Account::try_from).collect()
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        let row = portfolios
            .select(AccountDB::as_select())
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .into_core()?;

        row.try_into()
    }

    async fn upsert(&self, account: Account) -> Result<Account> {
        let record: AccountDB = account.clone().into();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(portfolios::table)
                    .values(&record)
                    .on_conflict(id)
                    .do_update()
                    .set(&record)
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await?;

        Ok(account)
    }

    async fn delete(&self, account_id: &str) -> Result<usize> {
        let account_id = account_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(portfolios.find(account_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
