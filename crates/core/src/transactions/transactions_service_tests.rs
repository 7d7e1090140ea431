//! Unit tests for the transaction service.

use super::*;
use crate::accounts::{Account, AccountCategory, AccountRepositoryTrait};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal_macros::dec;
use std::sync::{Arc, RwLock};

struct MockAccountRepository {
    accounts: Vec<Account>,
}

#[async_trait]
impl AccountRepositoryTrait for MockAccountRepository {
    fn get_all(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.clone())
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.accounts
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Account {}", account_id)))
    }

    async fn upsert(&self, _account: Account) -> Result<Account> {
        unimplemented!()
    }

    async fn delete(&self, _account_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

#[derive(Default)]
struct MockTransactionRepository {
    transactions: RwLock<Vec<Transaction>>,
}

#[async_trait]
impl TransactionRepositoryTrait for MockTransactionRepository {
    fn get_all(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.read().unwrap().clone())
    }

    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        self.transactions
            .read()
            .unwrap()
            .iter()
            .find(|t| t.id == transaction_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", transaction_id)))
    }

    fn get_by_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .read()
            .unwrap()
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, transaction: Transaction) -> Result<Transaction> {
        let mut store = self.transactions.write().unwrap();
        store.retain(|t| t.id != transaction.id);
        store.push(transaction.clone());
        Ok(transaction)
    }

    async fn delete(&self, transaction_id: &str) -> Result<usize> {
        let mut store = self.transactions.write().unwrap();
        let before = store.len();
        store.retain(|t| t.id != transaction_id);
        Ok(before - store.len())
    }

    async fn delete_by_account(&self, account_id: &str) -> Result<usize> {
        let mut store = self.transactions.write().unwrap();
        let before = store.len();
        store.retain(|t| t.account_id != account_id);
        Ok(before - store.len())
    }
}

fn account(id: &str) -> Account {
    let now = NaiveDateTime::default();
    Account {
        id: id.to_string(),
        name: id.to_string(),
        category: AccountCategory::Savings,
        currency: "USD".to_string(),
        nominal_value: dec!(100),
        loan: None,
        created_at: now,
        updated_at: now,
    }
}

fn service() -> (TransactionService, Arc<MockTransactionRepository>) {
    let transactions = Arc::new(MockTransactionRepository::default());
    let accounts = Arc::new(MockAccountRepository {
        accounts: vec![account("acc-1")],
    });
    (
        TransactionService::new(transactions.clone(), accounts),
        transactions,
    )
}

fn new_transaction(account_id: &str) -> NewTransaction {
    NewTransaction {
        id: None,
        account_id: account_id.to_string(),
        amount: dec!(42.50),
        direction: Direction::Outflow,
        category: "groceries".to_string(),
        note: Some("weekly shop".to_string()),
        occurred_at: NaiveDateTime::default(),
    }
}

#[tokio::test]
async fn test_create_transaction_assigns_id() {
    let (service, transactions) = service();

    let created = service
        .create_transaction(new_transaction("acc-1"))
        .await
        .unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(transactions.get_by_account("acc-1").unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_transaction_rejects_dangling_account() {
    let (service, transactions) = service();

    let result = service.create_transaction(new_transaction("no-such")).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
    assert!(transactions.get_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_transaction_rejects_non_positive_amount() {
    let (service, _) = service();

    let mut input = new_transaction("acc-1");
    input.amount = dec!(0);
    assert!(matches!(
        service.create_transaction(input).await,
        Err(Error::Validation(_))
    ));

    let mut input = new_transaction("acc-1");
    input.amount = dec!(-10);
    assert!(matches!(
        service.create_transaction(input).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn test_update_transaction_keeps_owning_account() {
    let (service, _) = service();
    let created = service
        .create_transaction(new_transaction("acc-1"))
        .await
        .unwrap();

    let updated = service
        .update_transaction(TransactionUpdate {
            id: Some(created.id.clone()),
            amount: dec!(99),
            direction: Direction::Inflow,
            category: "salary".to_string(),
            note: None,
            occurred_at: created.occurred_at,
        })
        .await
        .unwrap();

    assert_eq!(updated.account_id, "acc-1");
    assert_eq!(updated.amount, dec!(99));
    assert_eq!(updated.direction, Direction::Inflow);
}

#[tokio::test]
async fn test_delete_transaction_returns_row_count() {
    let (service, _) = service();
    let created = service
        .create_transaction(new_transaction("acc-1"))
        .await
        .unwrap();

    assert_eq!(service.delete_transaction(&created.id).await.unwrap(), 1);
    assert_eq!(service.delete_transaction(&created.id).await.unwrap(), 0);
}
