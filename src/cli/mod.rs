//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod payment;
pub mod status;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use payment::{handle_payment_command, PaymentCommands};
pub use status::{handle_refresh, handle_status};

use chrono::NaiveDate;

use crate::error::{VetSplitError, VetSplitResult};
use crate::models::Money;

/// Parse a YYYY-MM-DD date, defaulting to today
fn parse_date_or_today(date_str: Option<&str>) -> VetSplitResult<NaiveDate> {
    if let Some(date_str) = date_str {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            VetSplitError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        })
    } else {
        Ok(chrono::Local::now().date_naive())
    }
}

fn parse_amount(amount: &str) -> VetSplitResult<Money> {
    Money::parse(amount).map_err(|e| {
        VetSplitError::Validation(format!(
            "Invalid amount: '{}'. Use a whole number like '85000' or '85,000'. Error: {}",
            amount, e
        ))
    })
}
