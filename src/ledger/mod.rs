//! In-memory ledger
//!
//! A `Ledger` is a snapshot of every expense and payment in the store, typed
//! and in storage order. Records that cannot be decoded are dropped with a
//! warning; the rest of the collection still loads. Each kept record
//! remembers its logical position in the store so it can be deleted later
//! even when malformed rows before it were skipped.

pub mod codec;

use crate::models::{ExpenseRecord, PaymentRecord};
use crate::storage::{Collection, RawRecord, RecordStore};

pub use codec::DecodeError;

/// Records of one collection with their logical store positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordList<T> {
    records: Vec<T>,
    positions: Vec<usize>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            positions: Vec::new(),
        }
    }
}

impl<T> RecordList<T> {
    /// Build from records that sit at consecutive positions starting at 0
    pub fn from_records(records: Vec<T>) -> Self {
        let positions = (0..records.len()).collect();
        Self { records, positions }
    }

    fn decode<E: std::fmt::Display>(
        collection: Collection,
        raw: Vec<RawRecord>,
        decode: impl Fn(&RawRecord) -> Result<T, E>,
    ) -> Self {
        let mut list = Self::default();
        for (position, raw) in raw.iter().enumerate() {
            match decode(raw) {
                Ok(record) => {
                    list.records.push(record);
                    list.positions.push(position);
                }
                Err(e) => {
                    tracing::warn!(%collection, position, error = %e, "skipping malformed record");
                }
            }
        }
        list
    }

    /// All records in storage order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last `n` records by storage order, newest first
    pub fn most_recent(&self, n: usize) -> Vec<&T> {
        self.records.iter().rev().take(n).collect()
    }

    /// Like `most_recent`, paired with each record's logical store position
    pub fn most_recent_positioned(&self, n: usize) -> Vec<(usize, &T)> {
        self.positions
            .iter()
            .copied()
            .zip(self.records.iter())
            .rev()
            .take(n)
            .collect()
    }
}

/// Snapshot of all expense and payment records for a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    expenses: RecordList<ExpenseRecord>,
    payments: RecordList<PaymentRecord>,
}

impl Ledger {
    /// Build a ledger from already-typed records in storage order
    pub fn new(expenses: Vec<ExpenseRecord>, payments: Vec<PaymentRecord>) -> Self {
        Self {
            expenses: RecordList::from_records(expenses),
            payments: RecordList::from_records(payments),
        }
    }

    /// Read both collections from the store
    pub fn load(store: &RecordStore) -> Self {
        let ledger = Self {
            expenses: RecordList::decode(
                Collection::Expenses,
                store.load_collection(Collection::Expenses),
                codec::decode_expense,
            ),
            payments: RecordList::decode(
                Collection::Payments,
                store.load_collection(Collection::Payments),
                codec::decode_payment,
            ),
        };
        tracing::debug!(
            expenses = ledger.expenses.len(),
            payments = ledger.payments.len(),
            "ledger loaded"
        );
        ledger
    }

    pub fn all_expenses(&self) -> &[ExpenseRecord] {
        self.expenses.records()
    }

    pub fn all_payments(&self) -> &[PaymentRecord] {
        self.payments.records()
    }

    pub fn most_recent_expenses(&self, n: usize) -> Vec<&ExpenseRecord> {
        self.expenses.most_recent(n)
    }

    pub fn most_recent_payments(&self, n: usize) -> Vec<&PaymentRecord> {
        self.payments.most_recent(n)
    }

    pub fn expenses(&self) -> &RecordList<ExpenseRecord> {
        &self.expenses
    }

    pub fn payments(&self) -> &RecordList<PaymentRecord> {
        &self.payments
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.payments.is_empty()
    }
}
