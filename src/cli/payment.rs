//! Payment CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_date, format_payment_list};
use crate::error::VetSplitResult;
use crate::models::Member;
use crate::services::PaymentService;
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

/// Payment subcommands
#[derive(Subcommand)]
pub enum PaymentCommands {
    /// Record a repayment from a contributor
    Add {
        /// Who paid (one of the contributors)
        payer: String,
        /// Amount in whole units (e.g. "100000" or "100,000")
        amount: String,
        /// Payment date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List payments, newest first
    List {
        /// Number of payments to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Delete a payment by the # shown in the list
    Delete {
        /// Position from the list's # column
        position: usize,
    },
}

/// Handle a payment command
pub fn handle_payment_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PaymentCommands,
) -> VetSplitResult<()> {
    let service = PaymentService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        PaymentCommands::Add {
            payer,
            amount,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;
            // Fall back to the name as typed so the service reports the
            // valid choices
            let payer = service
                .find_contributor(&payer)
                .unwrap_or_else(|| Member::new(&payer));

            let payment = service.record(date, payer, amount)?;

            println!(
                "Recorded payment: {} from {}",
                payment.amount.format_with_symbol(symbol),
                payment.payer
            );
            println!("  Date: {}", format_date(payment.date, &settings.date_format));
            println!("  ID:   {}", payment.id);
        }

        PaymentCommands::List { limit } => {
            let payments = service.list();
            print!(
                "{}",
                format_payment_list(
                    &payments.most_recent_positioned(limit),
                    symbol,
                    &settings.date_format
                )
            );
        }

        PaymentCommands::Delete { position } => {
            service.delete_at(position)?;
            println!("Deleted payment #{}", position);
        }
    }

    Ok(())
}
