//! Expense service
//!
//! Records new veterinary expenses and removes them by position. Validation
//! happens before anything is written, so a rejected expense never reaches
//! the store.

use chrono::NaiveDate;

use crate::error::{VetSplitError, VetSplitResult};
use crate::ledger::{codec, RecordList};
use crate::models::{ExpenseRecord, Money};
use crate::storage::{Collection, Storage};

/// Service for expense records
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense
    ///
    /// Rejects a non-positive amount with a validation error. There is no
    /// duplicate detection.
    pub fn record(
        &self,
        date: NaiveDate,
        amount: Money,
        memo: Option<String>,
    ) -> VetSplitResult<ExpenseRecord> {
        let expense = ExpenseRecord::new(self.storage.next_id(), date, amount, memo);

        expense
            .validate()
            .map_err(|e| VetSplitError::Validation(e.to_string()))?;

        self.storage
            .records
            .append(Collection::Expenses, &codec::encode_expense(&expense))?;

        tracing::info!(id = %expense.id, %date, amount = %expense.amount, "expense recorded");
        Ok(expense)
    }

    /// Delete the expense at a logical store position
    pub fn delete_at(&self, position: usize) -> VetSplitResult<()> {
        self.storage.records.delete_at(Collection::Expenses, position)?;
        tracing::info!(position, "expense deleted");
        Ok(())
    }

    /// All expenses currently in the store
    pub fn list(&self) -> RecordList<ExpenseRecord> {
        self.storage.load_ledger().expenses().clone()
    }

    /// The `n` most recent expenses, newest first
    pub fn recent(&self, n: usize) -> Vec<ExpenseRecord> {
        self.list().most_recent(n).into_iter().cloned().collect()
    }
}
