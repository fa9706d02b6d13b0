//! Payment model
//!
//! A repayment from a contributor to the primary payer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::member::{Member, MemberRoster};
use super::money::Money;

/// A recorded payment toward a contributor's share
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Date the money was sent
    pub date: NaiveDate,

    /// Who paid
    pub payer: Member,

    /// Amount paid
    pub amount: Money,
}

impl PaymentRecord {
    pub fn new(id: RecordId, date: NaiveDate, payer: Member, amount: Money) -> Self {
        Self {
            id,
            date,
            payer,
            amount,
        }
    }

    /// Check the invariants a new payment must satisfy before it is stored
    pub fn validate(&self, roster: &MemberRoster) -> Result<(), PaymentValidationError> {
        if !self.amount.is_positive() {
            return Err(PaymentValidationError::NonPositiveAmount(self.amount));
        }
        if !roster.is_contributor(&self.payer) {
            return Err(PaymentValidationError::NotAContributor(self.payer.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for PaymentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} · {} {}", self.payer, self.date, self.amount)
    }
}

/// Validation errors for payments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentValidationError {
    NonPositiveAmount(Money),
    NotAContributor(Member),
}

impl fmt::Display for PaymentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Payment amount must be greater than zero, got {}", amount)
            }
            Self::NotAContributor(member) => {
                write!(f, "'{}' is not a contributor", member)
            }
        }
    }
}

impl std::error::Error for PaymentValidationError {}
