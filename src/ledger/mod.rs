//! Weekly income and expense ledger.
//!
//! The ledger holds manually entered transactions in memory and, when opened
//! from a file, writes them back as JSON after every change.
//!
//! # Example
//!
//! ```
//! use nz_pay_engine::ledger::Ledger;
//! use nz_pay_engine::models::{NewTransaction, TransactionKind};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let mut ledger = Ledger::in_memory();
//! let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//!
//! ledger.bank(Decimal::new(58850, 2), monday).unwrap();
//! ledger
//!     .add(NewTransaction {
//!         amount: Decimal::from(120),
//!         kind: TransactionKind::Expense,
//!         date: monday,
//!         label: "Rent".to_string(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(ledger.balance(), Decimal::new(46850, 2));
//! assert_eq!(ledger.week(monday).transactions.len(), 2);
//! ```

mod week;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{NewTransaction, Transaction, TransactionKind};

pub use week::{WeekView, week_start};

/// Label used for pay banked from a calculation.
pub const BANKED_PAY_LABEL: &str = "Weekly Pay";

/// An income and expense ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    path: Option<PathBuf>,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates an empty ledger that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens a file-backed ledger.
    ///
    /// A missing file starts an empty ledger; the file is created on the first
    /// change. A file that exists but is not a JSON transaction list returns
    /// `StorageError`.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();

        let transactions: Vec<Transaction> = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| storage_error(&path, e))?;
            serde_json::from_str(&content).map_err(|e| storage_error(&path, e))?
        } else {
            Vec::new()
        };

        debug!(
            path = %path.display(),
            transactions = transactions.len(),
            "Opened ledger"
        );

        Ok(Self {
            path: Some(path),
            transactions,
        })
    }

    /// Returns every transaction in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Looks up a transaction by id.
    pub fn get(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Adds a transaction, assigning it a fresh id.
    ///
    /// Ids are derived from the current time in milliseconds and always exceed
    /// every id already in the ledger.
    pub fn add(&mut self, entry: NewTransaction) -> EngineResult<Transaction> {
        let transaction = entry.into_transaction(self.next_id())?;
        let mut transactions = self.transactions.clone();
        transactions.push(transaction.clone());
        self.commit(transactions)?;
        Ok(transaction)
    }

    /// Replaces the fields of an existing transaction, keeping its id.
    pub fn update(&mut self, id: u64, entry: NewTransaction) -> EngineResult<Transaction> {
        let index = self.index_of(id)?;
        let transaction = entry.into_transaction(id)?;
        let mut transactions = self.transactions.clone();
        transactions[index] = transaction.clone();
        self.commit(transactions)?;
        Ok(transaction)
    }

    /// Removes a transaction, returning it.
    pub fn remove(&mut self, id: u64) -> EngineResult<Transaction> {
        let index = self.index_of(id)?;
        let mut transactions = self.transactions.clone();
        let removed = transactions.remove(index);
        self.commit(transactions)?;
        Ok(removed)
    }

    /// Records a calculated take-home amount as income, rounded to cents.
    pub fn bank(&mut self, amount: Decimal, date: NaiveDate) -> EngineResult<Transaction> {
        self.add(NewTransaction {
            amount: amount.round_dp(2),
            kind: TransactionKind::Income,
            date,
            label: BANKED_PAY_LABEL.to_string(),
        })
    }

    /// Income less expenses across every transaction.
    pub fn balance(&self) -> Decimal {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// The Monday-to-Sunday view of the week containing `date`.
    pub fn week(&self, date: NaiveDate) -> WeekView {
        WeekView::for_date(date, &self.transactions)
    }

    /// Writes the ledger to its file. Does nothing for an in-memory ledger.
    pub fn save(&self) -> EngineResult<()> {
        self.write(&self.transactions)
    }

    /// Writes `transactions` and only then makes them the ledger's contents.
    /// On a failed write the ledger is left unchanged.
    fn commit(&mut self, transactions: Vec<Transaction>) -> EngineResult<()> {
        self.write(&transactions)?;
        self.transactions = transactions;
        Ok(())
    }

    fn write(&self, transactions: &[Transaction]) -> EngineResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let json =
            serde_json::to_string_pretty(transactions).map_err(|e| storage_error(path, e))?;
        fs::write(path, json).map_err(|e| storage_error(path, e))
    }

    fn index_of(&self, id: u64) -> EngineResult<usize> {
        self.transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(EngineError::TransactionNotFound { id })
    }

    fn next_id(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let after_existing = self
            .transactions
            .iter()
            .map(|t| t.id + 1)
            .max()
            .unwrap_or(1);
        now.max(after_existing)
    }
}

fn storage_error(path: &Path, error: impl std::fmt::Display) -> EngineError {
    EngineError::StorageError {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
