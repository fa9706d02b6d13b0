//! Status and refresh commands
//!
//! `status` is the main view: the reconciliation followed by the most recent
//! expenses and payments.

use crate::config::Settings;
use crate::display::{format_expense_list, format_payment_list, format_summary};
use crate::error::VetSplitResult;
use crate::ledger::Ledger;
use crate::services::{reconcile, ReconciliationService};
use crate::storage::Storage;

/// Show the reconciliation and recent records
pub fn handle_status(storage: &Storage, settings: &Settings) -> VetSplitResult<()> {
    let (ledger, summary) = ReconciliationService::new(storage).summary_with_ledger();

    print!("{}", format_summary(&summary, &settings.currency_symbol));
    print_recent(&ledger, settings);

    Ok(())
}

/// Reconnect to the store and show what was read
pub fn handle_refresh(storage: &Storage, settings: &Settings) -> VetSplitResult<()> {
    let ledger = storage.refresh();

    println!(
        "Reloaded {} expenses and {} payments from '{}'",
        ledger.expenses().len(),
        ledger.payments().len(),
        storage.records.describe()
    );
    println!();

    let summary = reconcile(&ledger, storage.roster());
    print!("{}", format_summary(&summary, &settings.currency_symbol));

    Ok(())
}

fn print_recent(ledger: &Ledger, settings: &Settings) {
    let limit = settings.recent_limit;

    println!();
    println!("Recent expenses");
    print!(
        "{}",
        format_expense_list(
            &ledger.expenses().most_recent_positioned(limit),
            &settings.currency_symbol,
            &settings.date_format
        )
    );

    println!();
    println!("Recent payments");
    print!(
        "{}",
        format_payment_list(
            &ledger.payments().most_recent_positioned(limit),
            &settings.currency_symbol,
            &settings.date_format
        )
    );
}
