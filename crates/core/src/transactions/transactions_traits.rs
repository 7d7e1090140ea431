//! Transaction repository and service traits.

use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::errors::Result;

/// Trait defining the contract for Transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Lists all transactions, most recent first.
    fn get_all(&self) -> Result<Vec<Transaction>>;

    /// Retrieves a transaction by its ID.
    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;

    /// Lists the transactions owned by one account, most recent first.
    ///
    /// Served by the `account_id` secondary index, never a full scan.
    fn get_by_account(&self, account_id: &str) -> Result<Vec<Transaction>>;

    /// Creates or replaces a transaction keyed by its id.
    async fn upsert(&self, transaction: Transaction) -> Result<Transaction>;

    /// Deletes a transaction by its ID; 0 rows if absent.
    async fn delete(&self, transaction_id: &str) -> Result<usize>;

    /// Deletes every transaction owned by `account_id`.
    ///
    /// This is the cascade primitive used when an account is removed.
    async fn delete_by_account(&self, account_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Creates a new transaction after verifying the owning account exists.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Updates an existing transaction with business validation.
    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction>;

    /// Deletes a transaction by ID.
    async fn delete_transaction(&self, transaction_id: &str) -> Result<usize>;

    /// Retrieves a transaction by ID.
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    /// Lists all transactions.
    fn get_all_transactions(&self) -> Result<Vec<Transaction>>;

    /// Lists the transactions owned by one account.
    fn get_transactions_by_account(&self, account_id: &str) -> Result<Vec<Transaction>>;
}
