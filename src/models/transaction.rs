//! Ledger transaction models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Label given to transactions entered without one.
pub const UNTITLED_LABEL: &str = "Untitled";

/// Whether a transaction adds to or takes from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

/// A stored ledger entry.
///
/// # Example
///
/// ```
/// use nz_pay_engine::models::{Transaction, TransactionKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let txn = Transaction {
///     id: 1,
///     amount: Decimal::from(40),
///     kind: TransactionKind::Expense,
///     date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
///     label: "Groceries".to_string(),
/// };
/// assert_eq!(txn.signed_amount(), Decimal::from(-40));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique id assigned by the ledger.
    pub id: u64,
    /// Positive amount.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The day the money moved.
    pub date: NaiveDate,
    /// Free-text description.
    pub label: String,
}

impl Transaction {
    /// The amount with its sign applied: positive for income, negative for expense.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// The user-supplied fields of a transaction, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Positive amount.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The day the money moved.
    pub date: NaiveDate,
    /// Optional description; blank becomes [`UNTITLED_LABEL`].
    #[serde(default)]
    pub label: String,
}

impl NewTransaction {
    /// Validates the entry and attaches an id.
    pub(crate) fn into_transaction(self, id: u64) -> EngineResult<Transaction> {
        if self.amount <= Decimal::ZERO {
            return Err(EngineError::validation(
                "amount",
                format!("{} must be greater than zero", self.amount),
            ));
        }

        let label = match self.label.trim() {
            "" => UNTITLED_LABEL.to_string(),
            trimmed => trimmed.to_string(),
        };

        Ok(Transaction {
            id,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            label,
        })
    }
}
