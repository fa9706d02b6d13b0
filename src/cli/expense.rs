//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_date, format_expense_list};
use crate::error::VetSplitResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a vet bill
    Add {
        /// Amount in whole units (e.g. "85000" or "85,000")
        amount: String,
        /// Bill date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Memo (e.g. "vaccination", "checkup")
        #[arg(short, long)]
        memo: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Delete an expense by the # shown in the list
    Delete {
        /// Position from the list's # column
        position: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> VetSplitResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add { amount, date, memo } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;

            let expense = service.record(date, amount, memo)?;

            println!("Recorded expense: {}", expense.amount.format_with_symbol(symbol));
            println!("  Date: {}", format_date(expense.date, &settings.date_format));
            if let Some(memo) = &expense.memo {
                println!("  Memo: {}", memo);
            }
            println!("  ID:   {}", expense.id);
        }

        ExpenseCommands::List { limit } => {
            let expenses = service.list();
            print!(
                "{}",
                format_expense_list(
                    &expenses.most_recent_positioned(limit),
                    symbol,
                    &settings.date_format
                )
            );
        }

        ExpenseCommands::Delete { position } => {
            service.delete_at(position)?;
            println!("Deleted expense #{}", position);
        }
    }

    Ok(())
}
