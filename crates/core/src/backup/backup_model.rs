//! Backup document - the persisted backup/restore wire format.

use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::errors::{Error, Result};
use crate::goals::Goal;
use crate::portfolio::snapshot::Snapshot;
use crate::profile::Profile;
use crate::settings::Settings;
use crate::trades::TradePosition;
use crate::transactions::Transaction;

/// The full set of collections serialized as one JSON document.
///
/// All seven top-level keys are required; a payload missing any of them is
/// rejected as a whole, nothing is applied. Records round-trip losslessly -
/// ids and timestamps are preserved verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub profile: Profile,
    pub settings: Settings,
    pub portfolios: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub trades: Vec<TradePosition>,
    pub snapshots: Vec<Snapshot>,
}

impl BackupDocument {
    /// Parses a backup payload, rejecting anything that is not a complete
    /// document.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| Error::InvalidBackupFormat(e.to_string()))
    }

    /// Serializes the document for persistence.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidBackupFormat(e.to_string()))
    }

    /// Checks every record before a restore touches the store.
    ///
    /// A document failing any of these is rejected as a whole: account
    /// invariants must hold, transaction amounts must be positive, and
    /// every transaction must point at an account in the same document.
    /// Goal links are not checked here, dangling links are pruned silently
    /// elsewhere.
    pub fn validate(&self) -> Result<()> {
        for account in &self.portfolios {
            account.validate()?;
        }
        for transaction in &self.transactions {
            if transaction.amount <= rust_decimal::Decimal::ZERO {
                return Err(Error::InvalidBackupFormat(format!(
                    "Transaction {} has a non-positive amount",
                    transaction.id
                )));
            }
            if !self.portfolios.iter().any(|a| a.id == transaction.account_id) {
                return Err(Error::InvalidBackupFormat(format!(
                    "Transaction {} references unknown account {}",
                    transaction.id, transaction.account_id
                )));
            }
        }
        Ok(())
    }
}
