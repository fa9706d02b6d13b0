use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vetsplit::cli::{
    handle_expense_command, handle_payment_command, handle_refresh, handle_status,
    ExpenseCommands, PaymentCommands,
};
use vetsplit::config::{Settings, VetSplitPaths};
use vetsplit::storage::init::{initialize_store, needs_initialization};
use vetsplit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "vetsplit",
    version,
    about = "Shared vet expense ledger with equal-split reconciliation",
    long_about = "vetsplit keeps track of veterinary bills paid by one household \
                  member and the repayments the others make toward their equal \
                  share, and shows who still owes what."
)]
struct Cli {
    /// Store id to use instead of the configured one
    #[arg(long, global = true, env = "VETSPLIT_STORE")]
    store: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the store and its sheets
    Init,

    /// Show who owes what, plus recent records
    #[command(alias = "st")]
    Status,

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Payment commands
    #[command(subcommand, alias = "pay")]
    Payment(PaymentCommands),

    /// Reconnect to the store and reload everything
    Refresh,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = VetSplitPaths::new()?;
    let saved = Settings::load_or_create(&paths)?;
    let mut settings = saved.clone();
    if let Some(store) = cli.store {
        settings.store_id = store;
        settings.validate()?;
    }

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("vetsplit - Shared vet expense ledger");
            println!();
            println!("Run 'vetsplit --help' for usage information.");
            println!("Run 'vetsplit status' to see who owes what.");
            return Ok(());
        }
    };

    match command {
        Commands::Init => {
            let store_dir = initialize_store(&paths, &settings)?;
            // An override from --store is not persisted
            saved.save(&paths)?;
            println!("Initialized store '{}' at: {}", settings.store_id, store_dir.display());
            println!();
            println!("Members: {}", settings.members.join(", "));
            println!("Primary payer: {}", settings.primary_payer);
            println!();
            println!("Run 'vetsplit expense add <amount>' to record a vet bill.");
        }
        Commands::Config => {
            println!("vetsplit Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Store directory: {}", paths.store_dir(&settings.store_id).display());
            println!();
            println!("Settings:");
            println!("  Store id:       {}", settings.store_id);
            println!("  Members:        {}", settings.members.join(", "));
            println!("  Primary payer:  {}", settings.primary_payer);
            println!("  Currency:       {}", settings.currency_symbol);
            println!("  Date format:    {}", settings.date_format);
            println!("  Recent limit:   {}", settings.recent_limit);
        }
        Commands::Status => handle_status(&open_storage(&paths, &settings)?, &settings)?,
        Commands::Expense(cmd) => {
            handle_expense_command(&open_storage(&paths, &settings)?, &settings, cmd)?
        }
        Commands::Payment(cmd) => {
            handle_payment_command(&open_storage(&paths, &settings)?, &settings, cmd)?
        }
        Commands::Refresh => handle_refresh(&open_storage(&paths, &settings)?, &settings)?,
    }

    Ok(())
}

fn open_storage(paths: &VetSplitPaths, settings: &Settings) -> Result<Storage> {
    if needs_initialization(paths, settings) {
        bail!(
            "Store '{}' is not initialized. Run 'vetsplit init' first.",
            settings.store_id
        );
    }
    Ok(Storage::open(paths, settings)?)
}
