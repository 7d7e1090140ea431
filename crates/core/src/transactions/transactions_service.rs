//! Transaction service.

use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};

/// Service for managing transactions.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance.
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            account_repository,
        }
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        // The owning account must exist; a transaction is never created
        // against a dangling account id.
        self.account_repository
            .get_by_id(&new_transaction.account_id)?;

        debug!(
            "Creating {:?} transaction of {} on account {}",
            new_transaction.direction, new_transaction.amount, new_transaction.account_id
        );

        let transaction = Transaction {
            id: new_transaction
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            account_id: new_transaction.account_id,
            amount: new_transaction.amount,
            direction: new_transaction.direction,
            category: new_transaction.category,
            note: new_transaction.note,
            occurred_at: new_transaction.occurred_at,
            updated_at: Utc::now().naive_utc(),
        };

        self.transaction_repository.upsert(transaction).await
    }

    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction> {
        update.validate()?;

        let id = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;
        let existing = self.transaction_repository.get_by_id(&id)?;

        let transaction = Transaction {
            id,
            account_id: existing.account_id,
            amount: update.amount,
            direction: update.direction,
            category: update.category,
            note: update.note,
            occurred_at: update.occurred_at,
            updated_at: Utc::now().naive_utc(),
        };

        self.transaction_repository.upsert(transaction).await
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<usize> {
        self.transaction_repository.delete(transaction_id).await
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.transaction_repository.get_by_id(transaction_id)
    }

    fn get_all_transactions(&self) -> Result<Vec<Transaction>> {
        self.transaction_repository.get_all()
    }

    fn get_transactions_by_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.transaction_repository.get_by_account(account_id)
    }
}
