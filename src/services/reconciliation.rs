//! Reconciliation service
//!
//! Computes, from a ledger snapshot, the total expense, the equal share each
//! member owes, what each contributor has paid and what they still owe. The
//! functions here are pure; `ReconciliationService` only adds a fresh load.
//!
//! The share is `total / member count` truncated toward zero. The remainder
//! is not assigned to anyone; it is reported alongside so a caller can show
//! it.

use crate::ledger::Ledger;
use crate::models::{Member, MemberRole, MemberRoster, Money};
use crate::storage::Storage;

/// Where a member stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// Paid the clinic directly; settled by definition
    PrimaryPayer,
    /// Paid at least their share
    Settled,
    /// Still owes this much
    Owes(Money),
}

impl BalanceStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Owes(_))
    }
}

/// One member's line in the reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBalance {
    pub member: Member,
    /// Sum of recorded payments; `None` for the primary payer
    pub paid: Option<Money>,
    /// Share minus paid; negative when overpaid, always zero for the primary payer
    pub remaining: Money,
    pub status: BalanceStatus,
}

/// The full reconciliation view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationSummary {
    pub total_expense: Money,
    pub per_person_share: Money,
    /// Left over from the integer division; owed by nobody
    pub share_remainder: Money,
    /// One entry per roster member, in roster order
    pub balances: Vec<MemberBalance>,
}

impl ReconciliationSummary {
    /// Sum of what contributors still owe
    pub fn outstanding_total(&self) -> Money {
        self.balances
            .iter()
            .filter_map(|b| match b.status {
                BalanceStatus::Owes(amount) => Some(amount),
                _ => None,
            })
            .sum()
    }

    pub fn is_fully_settled(&self) -> bool {
        self.balances.iter().all(|b| b.status.is_settled())
    }

    pub fn balance_of(&self, member: &Member) -> Option<&MemberBalance> {
        self.balances.iter().find(|b| b.member == *member)
    }
}

/// Sum of all expense amounts
pub fn total_expense(ledger: &Ledger) -> Money {
    ledger.all_expenses().iter().map(|e| e.amount).sum()
}

/// Equal share of the total, truncated toward zero
pub fn per_person_share(total: Money, roster: &MemberRoster) -> Money {
    Money::new(total.units() / roster.split_count())
}

/// What the equal split leaves unassigned
pub fn share_remainder(total: Money, roster: &MemberRoster) -> Money {
    Money::new(total.units() % roster.split_count())
}

/// Sum of payments recorded for a member
pub fn paid_by(ledger: &Ledger, member: &Member) -> Money {
    ledger
        .all_payments()
        .iter()
        .filter(|p| p.payer == *member)
        .map(|p| p.amount)
        .sum()
}

/// What a member still owes; zero for the primary payer
///
/// Members outside the roster are treated like contributors.
pub fn remaining(ledger: &Ledger, roster: &MemberRoster, member: &Member) -> Money {
    if member == roster.primary_payer() {
        return Money::zero();
    }
    per_person_share(total_expense(ledger), roster) - paid_by(ledger, member)
}

/// Compute the full reconciliation view
pub fn reconcile(ledger: &Ledger, roster: &MemberRoster) -> ReconciliationSummary {
    let total = total_expense(ledger);
    let share = per_person_share(total, roster);

    let balances = roster
        .members()
        .iter()
        .map(|member| match roster.role_of(member) {
            Some(MemberRole::PrimaryPayer) => MemberBalance {
                member: member.clone(),
                paid: None,
                remaining: Money::zero(),
                status: BalanceStatus::PrimaryPayer,
            },
            _ => {
                let paid = paid_by(ledger, member);
                let remaining = share - paid;
                let status = if remaining.is_positive() {
                    BalanceStatus::Owes(remaining)
                } else {
                    BalanceStatus::Settled
                };
                MemberBalance {
                    member: member.clone(),
                    paid: Some(paid),
                    remaining,
                    status,
                }
            }
        })
        .collect();

    ReconciliationSummary {
        total_expense: total,
        per_person_share: share,
        share_remainder: share_remainder(total, roster),
        balances,
    }
}

/// Loads a fresh ledger and reconciles it
pub struct ReconciliationService<'a> {
    storage: &'a Storage,
}

impl<'a> ReconciliationService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Reconcile the current store contents
    pub fn summary(&self) -> ReconciliationSummary {
        let ledger = self.storage.load_ledger();
        reconcile(&ledger, self.storage.roster())
    }

    /// Reconcile and also hand back the ledger that was read
    pub fn summary_with_ledger(&self) -> (Ledger, ReconciliationSummary) {
        let ledger = self.storage.load_ledger();
        let summary = reconcile(&ledger, self.storage.roster());
        (ledger, summary)
    }
}
