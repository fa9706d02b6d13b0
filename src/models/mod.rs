//! Core data models for vetsplit
//!
//! This module contains the data structures of the shared-expense domain:
//! expenses, payments, members and the money/id value types.

pub mod expense;
pub mod ids;
pub mod member;
pub mod money;
pub mod payment;

pub use expense::{ExpenseRecord, ExpenseValidationError};
pub use ids::{IdGenerator, RecordId};
pub use member::{Member, MemberRole, MemberRoster, RosterError};
pub use money::{Money, MoneyParseError};
pub use payment::{PaymentRecord, PaymentValidationError};
