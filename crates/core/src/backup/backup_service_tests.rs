//! Unit tests for backup export/import.

use super::*;
use crate::accounts::{Account, AccountCategory, AccountRepositoryTrait, LoanTerms};
use crate::errors::{Error, Result};
use crate::goals::{Goal, GoalRepositoryTrait};
use crate::portfolio::snapshot::{Snapshot, SnapshotRepositoryTrait};
use crate::profile::{Profile, ProfileRepositoryTrait};
use crate::settings::{Settings, SettingsRepositoryTrait};
use crate::trades::{TradePosition, TradePositionRepositoryTrait};
use crate::transactions::{Direction, Transaction, TransactionRepositoryTrait};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;
use std::sync::{Arc, RwLock};

/// One in-memory store implementing every repository trait plus
/// maintenance, standing in for the whole storage crate.
#[derive(Default)]
struct InMemoryStore {
    accounts: RwLock<Vec<Account>>,
    transactions: RwLock<Vec<Transaction>>,
    goals: RwLock<Vec<Goal>>,
    trades: RwLock<Vec<TradePosition>>,
    snapshots: RwLock<Vec<Snapshot>>,
    settings: RwLock<Option<Settings>>,
    profile: RwLock<Option<Profile>>,
}

#[async_trait]
impl AccountRepositoryTrait for InMemoryStore {
    fn get_all(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.read().unwrap().clone())
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.accounts
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Account {}", account_id)))
    }

    async fn upsert(&self, account: Account) -> Result<Account> {
        let mut store = self.accounts.write().unwrap();
        store.retain(|a| a.id != account.id);
        store.push(account.clone());
        Ok(account)
    }

    async fn delete(&self, account_id: &str) -> Result<usize> {
        let mut store = self.accounts.write().unwrap();
        let before = store.len();
        store.retain(|a| a.id != account_id);
        Ok(before - store.len())
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryStore {
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

#[async_trait]
impl GoalRepositoryTrait for InMemoryStore {
    fn get_all(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.read().unwrap().clone())
    }

    fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        self.goals
            .read()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Goal {}", goal_id)))
    }

    async fn upsert(&self, goal: Goal) -> Result<Goal> {
        let mut store = self.goals.write().unwrap();
        store.retain(|g| g.id != goal.id);
        store.push(goal.clone());
        Ok(goal)
    }

    async fn delete(&self, goal_id: &str) -> Result<usize> {
        let mut store = self.goals.write().unwrap();
        let before = store.len();
        store.retain(|g| g.id != goal_id);
        Ok(before - store.len())
    }
}

#[async_trait]
impl TradePositionRepositoryTrait for InMemoryStore {
    fn get_all(&self) -> Result<Vec<TradePosition>> {
        Ok(self.trades.read().unwrap().clone())
    }

    fn get_by_id(&self, trade_id: &str) -> Result<TradePosition> {
        self.trades
            .read()
            .unwrap()
            .iter()
            .find(|t| t.id == trade_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("TradePosition {}", trade_id)))
    }

    async fn upsert(&self, trade: TradePosition) -> Result<TradePosition> {
        let mut store = self.trades.write().unwrap();
        store.retain(|t| t.id != trade.id);
        store.push(trade.clone());
        Ok(trade)
    }

    async fn delete(&self, trade_id: &str) -> Result<usize> {
        let mut store = self.trades.write().unwrap();
        let before = store.len();
        store.retain(|t| t.id != trade_id);
        Ok(before - store.len())
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for InMemoryStore {
    fn get_all(&self) -> Result<Vec<Snapshot>> {
        let mut all = self.snapshots.read().unwrap().clone();
        all.sort_by_key(|s| s.captured_at);
        Ok(all)
    }

    async fn upsert(&self, snapshot: Snapshot) -> Result<Snapshot> {
        let mut store = self.snapshots.write().unwrap();
        store.retain(|s| s.id != snapshot.id);
        store.push(snapshot.clone());
        Ok(snapshot)
    }

    async fn delete(&self, snapshot_id: &str) -> Result<usize> {
        let mut store = self.snapshots.write().unwrap();
        let before = store.len();
        store.retain(|s| s.id != snapshot_id);
        Ok(before - store.len())
    }
}

#[async_trait]
impl SettingsRepositoryTrait for InMemoryStore {
    fn get_settings(&self) -> Result<Settings> {
        Ok(self.settings.read().unwrap().clone().unwrap_or_default())
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        *self.settings.write().unwrap() = Some(settings.clone());
        Ok(())
    }
}

#[async_trait]
impl ProfileRepositoryTrait for InMemoryStore {
    fn get_profile(&self) -> Result<Option<Profile>> {
        Ok(self.profile.read().unwrap().clone())
    }

    async fn save_profile(&self, profile: &Profile) -> Result<()> {
        *self.profile.write().unwrap() = Some(profile.clone());
        Ok(())
    }
}

#[async_trait]
impl StoreMaintenanceTrait for InMemoryStore {
    async fn clear_all(&self) -> Result<()> {
        self.transactions.write().unwrap().clear();
        self.goals.write().unwrap().clear();
        self.trades.write().unwrap().clear();
        self.snapshots.write().unwrap().clear();
        self.accounts.write().unwrap().clear();
        *self.settings.write().unwrap() = None;
        *self.profile.write().unwrap() = None;
        Ok(())
    }
}

fn backup_service(store: Arc<InMemoryStore>) -> BackupService {
    BackupService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

async fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::default());

    AccountRepositoryTrait::upsert(
        store.as_ref(),
        Account {
            id: "acc-loan".to_string(),
            name: "Car loan".to_string(),
            category: AccountCategory::Loan,
            currency: "EUR".to_string(),
            nominal_value: dec!(11000),
            loan: Some(LoanTerms {
                principal: dec!(12000),
                monthly_installment: dec!(1000),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                billing_day: 10,
            }),
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 2, 1),
        },
    )
    .await
    .unwrap();

    TransactionRepositoryTrait::upsert(
        store.as_ref(),
        Transaction {
            id: "txn-1".to_string(),
            account_id: "acc-loan".to_string(),
            amount: dec!(1000),
            direction: Direction::Outflow,
            category: "installment".to_string(),
            note: Some("february".to_string()),
            occurred_at: date(2024, 2, 10),
            updated_at: date(2024, 2, 10),
        },
    )
    .await
    .unwrap();

    GoalRepositoryTrait::upsert(
        store.as_ref(),
        Goal {
            id: "goal-1".to_string(),
            name: "Payoff".to_string(),
            target_amount: dec!(12000),
            currency: "EUR".to_string(),
            linked_account_ids: vec!["acc-loan".to_string()],
            deadline: NaiveDate::from_ymd_opt(2025, 1, 1),
            color_tag: "red".to_string(),
            created_at: date(2024, 1, 16),
            updated_at: date(2024, 1, 16),
        },
    )
    .await
    .unwrap();

    TradePositionRepositoryTrait::upsert(
        store.as_ref(),
        TradePosition {
            id: "pos-1".to_string(),
            symbol: "VWCE".to_string(),
            average_cost: dec!(95.5),
            quantity: dec!(12),
            currency: "EUR".to_string(),
            created_at: date(2024, 3, 1),
            updated_at: date(2024, 3, 1),
        },
    )
    .await
    .unwrap();

    SnapshotRepositoryTrait::upsert(
        store.as_ref(),
        Snapshot {
            id: "snap-1".to_string(),
            captured_at: date(2024, 4, 1),
            currency: "EUR".to_string(),
            savings_total: dec!(100),
            investments_total: dec!(1146),
            debt_total: dec!(0),
            loan_total: dec!(10000),
        },
    )
    .await
    .unwrap();

    store
        .save_settings(&Settings {
            base_currency: "EUR".to_string(),
            theme: "dark".to_string(),
            onboarding_completed: true,
        })
        .await
        .unwrap();

    store
        .save_profile(&Profile {
            display_name: "Dana".to_string(),
            email: Some("dana@example.com".to_string()),
            created_at: date(2024, 1, 1),
            updated_at: date(2024, 1, 1),
        })
        .await
        .unwrap();

    store
}

#[tokio::test]
async fn test_backup_round_trip_reproduces_every_record() {
    let source = seeded_store().await;
    let exported = backup_service(source).export_backup().unwrap();

    // Through the wire format and into an empty store.
    let payload = exported.to_json().unwrap();
    let parsed = BackupDocument::from_json(&payload).unwrap();

    let target = Arc::new(InMemoryStore::default());
    backup_service(target.clone())
        .import_backup(parsed)
        .await
        .unwrap();

    let reexported = backup_service(target).export_backup().unwrap();
    assert_eq!(exported, reexported);
}

#[tokio::test]
async fn test_import_replaces_existing_contents() {
    let source = seeded_store().await;
    let document = backup_service(source).export_backup().unwrap();

    let target = seeded_store().await;
    AccountRepositoryTrait::upsert(
        target.as_ref(),
        Account {
            id: "stale".to_string(),
            name: "Stale".to_string(),
            category: AccountCategory::Savings,
            currency: "USD".to_string(),
            nominal_value: dec!(1),
            loan: None,
            created_at: date(2023, 1, 1),
            updated_at: date(2023, 1, 1),
        },
    )
    .await
    .unwrap();

    backup_service(target.clone())
        .import_backup(document)
        .await
        .unwrap();

    assert!(matches!(
        AccountRepositoryTrait::get_by_id(target.as_ref(), "stale"),
        Err(Error::NotFound(_))
    ));
    assert_eq!(AccountRepositoryTrait::get_all(target.as_ref()).unwrap().len(), 1);
}

#[tokio::test]
async fn test_import_rejects_orphan_transaction_without_wiping() {
    let source = seeded_store().await;
    let mut document = backup_service(source).export_backup().unwrap();
    document.transactions[0].account_id = "no-such-account".to_string();

    let target = seeded_store().await;
    let result = backup_service(target.clone()).import_backup(document).await;

    assert!(matches!(result, Err(Error::InvalidBackupFormat(_))));
    // The bad document never reached the store.
    assert_eq!(AccountRepositoryTrait::get_all(target.as_ref()).unwrap().len(), 1);
    assert!(TransactionRepositoryTrait::get_by_id(target.as_ref(), "txn-1").is_ok());
}

#[test]
fn test_from_json_rejects_missing_top_level_key() {
    // No "snapshots" key.
    let payload = r#"{
        "profile": {"displayName": "", "email": null,
                    "createdAt": "1970-01-01T00:00:00", "updatedAt": "1970-01-01T00:00:00"},
        "settings": {"baseCurrency": "USD", "theme": "light", "onboardingCompleted": false},
        "portfolios": [],
        "transactions": [],
        "goals": [],
        "trades": []
    }"#;

    assert!(matches!(
        BackupDocument::from_json(payload),
        Err(Error::InvalidBackupFormat(_))
    ));
}

#[test]
fn test_from_json_rejects_malformed_payload() {
    assert!(matches!(
        BackupDocument::from_json("not json"),
        Err(Error::InvalidBackupFormat(_))
    ));
}
