//! Account service - validation, id/timestamp assignment, and the
//! referential-integrity rules around account removal.

use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::GoalRepositoryTrait;
use crate::transactions::TransactionRepositoryTrait;

/// Service for managing accounts.
///
/// This is the single place where the Account -> Transaction ownership rule
/// and the Account <-> Goal weak-reference rule are enforced.
pub struct AccountService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance.
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            transaction_repository,
            goal_repository,
        }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!(
            "Creating account '{}' ({:?}, {})",
            new_account.name, new_account.category, new_account.currency
        );

        let now = Utc::now().naive_utc();
        let account = Account {
            id: new_account
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_account.name,
            category: new_account.category,
            currency: new_account.currency,
            nominal_value: new_account.nominal_value,
            loan: new_account.loan,
            created_at: now,
            updated_at: now,
        };

        self.account_repository.upsert(account).await
    }

    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;

        let id = account_update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;
        let existing = self.account_repository.get_by_id(&id)?;

        let account = Account {
            id,
            name: account_update.name,
            category: account_update.category,
            currency: account_update.currency,
            nominal_value: account_update.nominal_value,
            loan: account_update.loan,
            created_at: existing.created_at,
            updated_at: Utc::now().naive_utc(),
        };

        self.account_repository.upsert(account).await
    }

    /// Deletes an account, its owned transactions, and every goal link to it.
    ///
    /// Ordering matters: owned transactions and goal links go first, the
    /// account record last. A crash between steps can only leave orphaned
    /// children pointing at an already-deleted account id, which the next
    /// full re-scan prunes; it can never leave a live account with dangling
    /// children.
    async fn delete_account(&self, account_id: &str) -> Result<()> {
        debug!("Deleting account {} with owned records", account_id);

        let removed = self
            .transaction_repository
            .delete_by_account(account_id)
            .await?;
        debug!("Removed {} transactions owned by {}", removed, account_id);

        for goal in self.goal_repository.get_all()? {
            if goal.linked_account_ids.iter().any(|id| id == account_id) {
                let mut pruned = goal;
                pruned
                    .linked_account_ids
                    .retain(|id| id != account_id);
                pruned.updated_at = Utc::now().naive_utc();
                // The goal survives even with an empty link list.
                self.goal_repository.upsert(pruned).await?;
            }
        }

        self.account_repository.delete(account_id).await?;
        Ok(())
    }

    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.account_repository.get_by_id(account_id)
    }

    fn get_all_accounts(&self) -> Result<Vec<Account>> {
        self.account_repository.get_all()
    }
}
