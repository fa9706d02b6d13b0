//! Payment service
//!
//! Records repayments from contributors. The payer must be one of the
//! roster's contributors; payments are not checked against the outstanding
//! balance, so overpaying simply drives the remaining amount negative.

use chrono::NaiveDate;

use crate::error::{VetSplitError, VetSplitResult};
use crate::ledger::{codec, RecordList};
use crate::models::{Member, Money, PaymentRecord, PaymentValidationError};
use crate::storage::{Collection, Storage};

/// Service for payment records
pub struct PaymentService<'a> {
    storage: &'a Storage,
}

impl<'a> PaymentService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a payment from a contributor
    pub fn record(
        &self,
        date: NaiveDate,
        payer: Member,
        amount: Money,
    ) -> VetSplitResult<PaymentRecord> {
        let roster = self.storage.roster();
        let payment = PaymentRecord::new(self.storage.next_id(), date, payer, amount);

        payment.validate(roster).map_err(|e| match e {
            PaymentValidationError::NotAContributor(payer) => VetSplitError::InvalidPayer {
                payer: payer.to_string(),
                allowed: roster.contributors().map(|m| m.to_string()).collect(),
            },
            other => VetSplitError::Validation(other.to_string()),
        })?;

        self.storage
            .records
            .append(Collection::Payments, &codec::encode_payment(&payment))?;

        tracing::info!(
            id = %payment.id,
            payer = %payment.payer,
            %date,
            amount = %payment.amount,
            "payment recorded"
        );
        Ok(payment)
    }

    /// Find a contributor by name, case-insensitively
    pub fn find_contributor(&self, name: &str) -> Option<Member> {
        let wanted = name.trim().to_lowercase();
        self.storage
            .roster()
            .contributors()
            .find(|m| m.name().to_lowercase() == wanted)
            .cloned()
    }

    /// Delete the payment at a logical store position
    pub fn delete_at(&self, position: usize) -> VetSplitResult<()> {
        self.storage.records.delete_at(Collection::Payments, position)?;
        tracing::info!(position, "payment deleted");
        Ok(())
    }

    /// All payments currently in the store
    pub fn list(&self) -> RecordList<PaymentRecord> {
        self.storage.load_ledger().payments().clone()
    }

    /// The `n` most recent payments, newest first
    pub fn recent(&self, n: usize) -> Vec<PaymentRecord> {
        self.list().most_recent(n).into_iter().cloned().collect()
    }
}
