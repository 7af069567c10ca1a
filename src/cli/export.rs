//! Export CLI command

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{WalletError, WalletResult};
use crate::export::{
    export_cards_csv, export_transactions_csv, export_wallet_json, export_wallet_yaml,
};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON (cards, transactions and totals)
    Json,
    /// YAML (same content as JSON, with a comment header)
    Yaml,
    /// CSV (transactions, or cards with --cards)
    Csv,
}

/// Write an export to `output`, or stdout when no path is given
pub fn handle_export(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    cards: bool,
) -> WalletResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                WalletError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, cards, &mut writer)?;
            writer.flush().map_err(|e| WalletError::Export(e.to_string()))?;
            eprintln!("Exported to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, format, cards, &mut writer)?;
        }
    }
    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    cards: bool,
    writer: &mut W,
) -> WalletResult<()> {
    match format {
        ExportFormat::Json => export_wallet_json(storage, writer),
        ExportFormat::Yaml => export_wallet_yaml(storage, writer),
        ExportFormat::Csv if cards => export_cards_csv(storage, writer),
        ExportFormat::Csv => export_transactions_csv(storage, writer),
    }
}
