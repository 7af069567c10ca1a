//! YAML export

use std::io::Write;

use crate::error::{WalletError, WalletResult};
use crate::export::json::WalletExport;
use crate::storage::Storage;

fn export_err(e: impl std::fmt::Display) -> WalletError {
    WalletError::Export(e.to_string())
}

/// Write the full wallet as YAML, preceded by a comment header
pub fn export_wallet_yaml<W: Write>(storage: &Storage, writer: &mut W) -> WalletResult<()> {
    let export = WalletExport::from_storage(storage)?;

    writeln!(writer, "# Wallet Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(writer, "# Card numbers are masked. CVVs are not exported.").map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::demo_storage;

    #[test]
    fn test_yaml_export() {
        let storage = demo_storage().unwrap();
        let mut buf = Vec::new();
        export_wallet_yaml(&storage, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("# Wallet Export"));
        assert!(output.contains("schema_version"));
        assert!(output.contains("Coffee Shop"));
        assert!(output.contains("Groceries"));
        assert!(!output.contains("4111111111111234"));
    }
}
