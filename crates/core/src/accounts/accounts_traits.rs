//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations persist records verbatim - ids and timestamps are set by
/// the service layer, so `upsert` is idempotent and backup import reproduces
/// records exactly.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Lists all accounts, ordered by name.
    fn get_all(&self) -> Result<Vec<Account>>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Creates or replaces an account keyed by its id.
    async fn upsert(&self, account: Account) -> Result<Account>;

    /// Deletes an account by its ID.
    ///
    /// Returns the number of deleted records; 0 if the id was absent.
    async fn delete(&self, account_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer handles business validation, id/timestamp assignment,
/// and the referential-integrity rules around account removal.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Updates an existing account with business validation.
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Deletes an account and its owned transactions, and prunes the
    /// account's id from every goal that links it.
    async fn delete_account(&self, account_id: &str) -> Result<()>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts.
    fn get_all_accounts(&self) -> Result<Vec<Account>>;
}
