//! Expense model
//!
//! A single veterinary bill paid by the primary payer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::money::Money;

/// A recorded veterinary expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Date of the bill
    pub date: NaiveDate,

    /// Amount billed
    pub amount: Money,

    /// Optional note (e.g. "vaccination", "checkup")
    #[serde(default)]
    pub memo: Option<String>,
}

impl ExpenseRecord {
    /// Create an expense; a blank memo is stored as `None`
    pub fn new(id: RecordId, date: NaiveDate, amount: Money, memo: Option<String>) -> Self {
        Self {
            id,
            date,
            amount,
            memo: normalize_memo(memo),
        }
    }

    /// Check the invariants a new expense must satisfy before it is stored
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

pub(crate) fn normalize_memo(memo: Option<String>) -> Option<String> {
    memo.map(|m| m.trim().to_string()).filter(|m| !m.is_empty())
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.memo {
            Some(memo) => write!(f, "{} - {} {}", self.date, memo, self.amount),
            None => write!(f, "{} {}", self.date, self.amount),
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be greater than zero, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_blank_memo_is_none() {
        let e = ExpenseRecord::new(RecordId::from_raw(1), date(), Money::new(10), Some("  ".into()));
        assert_eq!(e.memo, None);

        let e = ExpenseRecord::new(
            RecordId::from_raw(1),
            date(),
            Money::new(10),
            Some(" checkup ".into()),
        );
        assert_eq!(e.memo.as_deref(), Some("checkup"));
    }

    #[test]
    fn test_validate_amount() {
        let ok = ExpenseRecord::new(RecordId::from_raw(1), date(), Money::new(1), None);
        assert!(ok.validate().is_ok());

        let zero = ExpenseRecord::new(RecordId::from_raw(1), date(), Money::zero(), None);
        assert_eq!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );
    }

    #[test]
    fn test_display() {
        let e = ExpenseRecord::new(
            RecordId::from_raw(1),
            date(),
            Money::new(85_000),
            Some("vaccination".into()),
        );
        assert_eq!(e.to_string(), "2025-01-15 - vaccination 85,000");
    }
}
