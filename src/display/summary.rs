//! Reconciliation display formatting

use crate::services::{BalanceStatus, ReconciliationSummary};

/// Format the reconciliation view: total, share and one line per member
pub fn format_summary(summary: &ReconciliationSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total expense:  {}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Per person:     {}\n",
        summary.per_person_share.format_with_symbol(symbol)
    ));
    if !summary.share_remainder.is_zero() {
        output.push_str(&format!(
            "Unsplit:        {} (remainder of the equal split)\n",
            summary.share_remainder.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    output.push_str("Settlement\n");
    output.push_str(&"-".repeat(44));
    output.push('\n');

    let name_width = summary
        .balances
        .iter()
        .map(|b| b.member.name().chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    for balance in &summary.balances {
        let detail = match balance.paid {
            Some(paid) => format!("paid {}", paid.format_with_symbol(symbol)),
            None => "(payer)".to_string(),
        };
        let status = match balance.status {
            BalanceStatus::PrimaryPayer | BalanceStatus::Settled => "settled ✓".to_string(),
            BalanceStatus::Owes(amount) => {
                format!("{} left", amount.format_with_symbol(symbol))
            }
        };
        output.push_str(&format!(
            "{:<name_width$}  {:<18}  {}\n",
            balance.member.name(),
            detail,
            status,
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::models::{ExpenseRecord, MemberRoster, Money, PaymentRecord, RecordId};
    use crate::services::reconcile;
    use chrono::NaiveDate;

    fn summary(total: i64, paid: &[(&str, i64)]) -> ReconciliationSummary {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let roster = MemberRoster::new(
            vec!["Mom".into(), "Seunghwa".into(), "Seungjin".into()],
            "Mom".into(),
        )
        .unwrap();
        let expenses = vec![ExpenseRecord::new(RecordId::from_raw(1), day, Money::new(total), None)];
        let payments = paid
            .iter()
            .map(|(who, amount)| {
                PaymentRecord::new(RecordId::from_raw(2), day, (*who).into(), Money::new(*amount))
            })
            .collect();
        reconcile(&Ledger::new(expenses, payments), &roster)
    }

    #[test]
    fn test_format_summary() {
        let output = format_summary(&summary(300_000, &[("Seunghwa", 40_000)]), "₩");

        assert!(output.contains("Total expense:  ₩300,000"));
        assert!(output.contains("Per person:     ₩100,000"));
        assert!(!output.contains("Unsplit"));
        assert!(output.contains("(payer)"));
        assert!(output.contains("paid ₩40,000"));
        assert!(output.contains("₩60,000 left"));
        assert!(output.contains("paid ₩0"));
    }

    #[test]
    fn test_remainder_shown() {
        let output = format_summary(&summary(100_000, &[]), "");
        assert!(output.contains("Unsplit:        1 (remainder of the equal split)"));
    }
}
