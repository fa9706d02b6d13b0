//! Display formatting for terminal output
//!
//! Provides utilities for formatting the reconciliation view and record
//! lists for the command line.

pub mod records;
pub mod summary;

pub use records::{format_expense_list, format_payment_list};
pub use summary::format_summary;

use chrono::NaiveDate;

use crate::config::is_valid_date_format;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date, falling back to YYYY-MM-DD if the format is unusable
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    if is_valid_date_format(date_format) {
        date.format(date_format).to_string()
    } else {
        date.format(FALLBACK_DATE_FORMAT).to_string()
    }
}
