//! Conversion between typed records and stored cell text
//!
//! Decoding is strict per field and reports which field was wrong; the
//! ledger decides what to do with a record that fails.

use std::fmt;

use chrono::NaiveDate;

use crate::models::{ExpenseRecord, Member, Money, PaymentRecord, RecordId};
use crate::storage::RawRecord;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Why a stored record could not be turned into a typed one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    Missing(&'static str),
    Invalid { field: &'static str, value: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "missing {}", field),
            Self::Invalid { field, value } => write!(f, "invalid {}: '{}'", field, value),
        }
    }
}

impl std::error::Error for DecodeError {}

fn required<'a>(raw: &'a RawRecord, field: &'static str) -> Result<&'a str, DecodeError> {
    match raw.get(field).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DecodeError::Missing(field)),
    }
}

fn invalid(field: &'static str, value: &str) -> DecodeError {
    DecodeError::Invalid {
        field,
        value: value.to_string(),
    }
}

fn decode_id(raw: &RawRecord) -> Result<RecordId, DecodeError> {
    let value = required(raw, "id")?;
    // Ids share the integer rules of amounts, minus the sign restriction
    Money::parse(value)
        .map(|m| RecordId::from_raw(m.units()))
        .map_err(|_| invalid("id", value))
}

fn decode_date(raw: &RawRecord) -> Result<NaiveDate, DecodeError> {
    let value = required(raw, "date")?;
    // "2025-01-15 00:00:00" and "2025-01-15T00:00:00" keep only the date
    let day = value.split([' ', 'T']).next().unwrap_or(value);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
        .ok_or_else(|| invalid("date", value))
}

fn decode_amount(raw: &RawRecord) -> Result<Money, DecodeError> {
    let value = required(raw, "amount")?;
    match Money::parse(value) {
        Ok(amount) if !amount.is_negative() => Ok(amount),
        _ => Err(invalid("amount", value)),
    }
}

pub fn decode_expense(raw: &RawRecord) -> Result<ExpenseRecord, DecodeError> {
    let memo = raw.get("memo").map(str::to_string);
    Ok(ExpenseRecord::new(
        decode_id(raw)?,
        decode_date(raw)?,
        decode_amount(raw)?,
        memo,
    ))
}

pub fn decode_payment(raw: &RawRecord) -> Result<PaymentRecord, DecodeError> {
    Ok(PaymentRecord::new(
        decode_id(raw)?,
        decode_date(raw)?,
        Member::new(required(raw, "payer")?),
        decode_amount(raw)?,
    ))
}

pub fn encode_expense(expense: &ExpenseRecord) -> RawRecord {
    RawRecord::new()
        .with("id", expense.id.to_string())
        .with("date", expense.date.format("%Y-%m-%d").to_string())
        .with("amount", expense.amount.units().to_string())
        .with("memo", expense.memo.clone().unwrap_or_default())
}

pub fn encode_payment(payment: &PaymentRecord) -> RawRecord {
    RawRecord::new()
        .with("id", payment.id.to_string())
        .with("date", payment.date.format("%Y-%m-%d").to_string())
        .with("payer", payment.payer.name())
        .with("amount", payment.amount.units().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_expense(id: &str, date: &str, amount: &str) -> RawRecord {
        RawRecord::new()
            .with("id", id)
            .with("date", date)
            .with("amount", amount)
    }

    #[test]
    fn test_decode_expense() {
        let raw = raw_expense("1736899200000", "2025-01-15", "85,000").with("memo", " checkup ");
        let expense = decode_expense(&raw).unwrap();

        assert_eq!(expense.id.as_i64(), 1_736_899_200_000);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(expense.amount, Money::new(85_000));
        assert_eq!(expense.memo.as_deref(), Some("checkup"));
    }

    #[test]
    fn test_memo_column_is_optional() {
        let expense = decode_expense(&raw_expense("1", "2025-01-15", "10")).unwrap();
        assert_eq!(expense.memo, None);
    }

    #[test]
    fn test_date_variants() {
        for text in ["2025-03-09", "2025/03/09", "2025.03.09", "2025-03-09 00:00:00"] {
            let expense = decode_expense(&raw_expense("1", text, "10")).unwrap();
            assert_eq!(expense.date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        }
    }

    #[test]
    fn test_spreadsheet_style_numbers() {
        let expense = decode_expense(&raw_expense("17.0", "2025-01-15", "120000.0")).unwrap();
        assert_eq!(expense.id.as_i64(), 17);
        assert_eq!(expense.amount.units(), 120_000);
    }

    #[test]
    fn test_decode_failures() {
        assert_eq!(
            decode_expense(&raw_expense("", "2025-01-15", "10")),
            Err(DecodeError::Missing("id"))
        );
        assert_eq!(
            decode_expense(&raw_expense("1", "yesterday", "10")),
            Err(invalid("date", "yesterday"))
        );
        assert_eq!(
            decode_expense(&raw_expense("1", "2025-01-15", "-10")),
            Err(invalid("amount", "-10"))
        );
        assert_eq!(
            decode_expense(&raw_expense("1", "2025-01-15", "ten")),
            Err(invalid("amount", "ten"))
        );
        assert_eq!(
            decode_payment(&raw_expense("1", "2025-01-15", "10")),
            Err(DecodeError::Missing("payer"))
        );
    }

    #[test]
    fn test_encode_decode_payment() {
        let payment = PaymentRecord::new(
            RecordId::from_raw(42),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            "Seunghwa".into(),
            Money::new(40_000),
        );
        let raw = encode_payment(&payment);
        assert_eq!(raw.get("date"), Some("2025-02-01"));
        assert_eq!(raw.get("amount"), Some("40000"));
        assert_eq!(decode_payment(&raw).unwrap(), payment);
    }

    #[test]
    fn test_encode_expense_blank_memo() {
        let expense = ExpenseRecord::new(
            RecordId::from_raw(1),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            Money::new(5),
            None,
        );
        assert_eq!(encode_expense(&expense).get("memo"), Some(""));
    }
}
