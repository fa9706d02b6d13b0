//! Service layer for vetsplit
//!
//! The service layer provides business logic on top of the storage layer:
//! validated creation and deletion of records, and the reconciliation view.

pub mod expense;
pub mod payment;
pub mod reconciliation;

pub use expense::ExpenseService;
pub use payment::PaymentService;
pub use reconciliation::{
    reconcile, BalanceStatus, MemberBalance, ReconciliationService, ReconciliationSummary,
};
