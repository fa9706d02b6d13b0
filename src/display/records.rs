//! Expense and payment list formatting
//!
//! Lists are newest first. The `#` column is the record's store position,
//! which is what the delete commands take.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ExpenseRecord, PaymentRecord};

use super::format_date;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Memo")]
    memo: String,
}

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Payer")]
    payer: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format positioned expenses as a table
pub fn format_expense_list(
    expenses: &[(usize, &ExpenseRecord)],
    symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows = expenses.iter().map(|(position, e)| ExpenseRow {
        position: *position,
        date: format_date(e.date, date_format),
        amount: e.amount.format_with_symbol(symbol),
        memo: e.memo.clone().unwrap_or_default(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format positioned payments as a table
pub fn format_payment_list(
    payments: &[(usize, &PaymentRecord)],
    symbol: &str,
    date_format: &str,
) -> String {
    if payments.is_empty() {
        return "No payments recorded yet.\n".to_string();
    }

    let rows = payments.iter().map(|(position, p)| PaymentRow {
        position: *position,
        payer: p.payer.to_string(),
        date: format_date(p.date, date_format),
        amount: p.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordId};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_expense_list(&[], "₩", "%Y-%m-%d"), "No expenses recorded yet.\n");
        assert_eq!(format_payment_list(&[], "₩", "%Y-%m-%d"), "No payments recorded yet.\n");
    }

    #[test]
    fn test_expense_table() {
        let expense = ExpenseRecord::new(
            RecordId::from_raw(1),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::new(85_000),
            Some("vaccination".into()),
        );
        let output = format_expense_list(&[(3, &expense)], "₩", "%Y-%m-%d");

        assert!(output.contains("Memo"));
        assert!(output.contains("2025-01-15"));
        assert!(output.contains("₩85,000"));
        assert!(output.contains("vaccination"));
    }

    #[test]
    fn test_unusable_date_format_falls_back() {
        let expense = ExpenseRecord::new(
            RecordId::from_raw(1),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::new(10),
            None,
        );
        let output = format_expense_list(&[(0, &expense)], "", "%Y-%Q");
        assert!(output.contains("2025-01-15"));
    }

    #[test]
    fn test_payment_table_uses_date_format() {
        let payment = PaymentRecord::new(
            RecordId::from_raw(1),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            "Seunghwa".into(),
            Money::new(40_000),
        );
        let output = format_payment_list(&[(0, &payment)], "", "%d/%m/%Y");

        assert!(output.contains("Seunghwa"));
        assert!(output.contains("01/02/2025"));
        assert!(output.contains("40,000"));
    }
}
