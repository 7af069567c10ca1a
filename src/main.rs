use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wallet_cli::cli::{
    handle_card_command, handle_export, handle_transaction_command, CardCommands, ExportFormat,
    TransactionCommands,
};
use wallet_cli::config::{Settings, WalletPaths};
use wallet_cli::display::format_home_summary;
use wallet_cli::services::SummaryService;
use wallet_cli::storage::demo_storage;

#[derive(Parser)]
#[command(
    name = "wallet",
    author = "Kaylee Beyene",
    version,
    about = "In-memory wallet: cards, transactions and balance",
    long_about = "Manages credit cards and a transaction ledger in memory. Each run \
                  starts from the demo wallet; nothing is saved between runs except \
                  the settings file."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home screen: balance, cards and recent transactions
    Summary,

    /// Card management commands
    #[command(subcommand)]
    Card(CardCommands),

    /// Transaction commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Show how a card number is grouped and masked
    Mask {
        /// Card number, spaces allowed
        #[arg(num_args = 1.., required = true)]
        digits: Vec<String>,
    },

    /// Export the wallet
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export cards instead of transactions (CSV only)
        #[arg(long)]
        cards: bool,
    },

    /// Show the audit trail for this run
    Audit,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    wallet_cli::init_tracing(cli.verbose);

    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    let storage = demo_storage()?;

    match cli.command {
        Some(Commands::Summary) | None => {
            let summary = SummaryService::new(&storage)
                .home_summary_sized(settings.preview_count, settings.recent_count)?;
            print!("{}", format_home_summary(&summary, &settings));
        }
        Some(Commands::Card(cmd)) => handle_card_command(&storage, &settings, cmd)?,
        Some(Commands::Txn(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Mask { digits }) => {
            let normalized = wallet_cli::normalize(&digits.join(" "));
            println!("{}", normalized.grouped);
            println!("{}", normalized.masked);
        }
        Some(Commands::Export {
            format,
            output,
            cards,
        }) => handle_export(&storage, format, output, cards)?,
        Some(Commands::Audit) => {
            // Seeding is not audited, so a fresh run has an empty trail
            let entries = storage.audit.read_all()?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config) => {
            println!("Wallet Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Cards previewed:   {}", settings.preview_count);
            println!("  Recent shown:      {}", settings.recent_count);
            println!("  Reveal by default: {}", settings.reveal_sensitive_by_default);
        }
    }

    Ok(())
}
