//! In-memory append-only audit log
//!
//! Entries live only as long as the owning `Storage`.

use std::sync::RwLock;

use crate::error::{WalletError, WalletResult};

use super::entry::AuditEntry;

/// Append-only list of audit entries, oldest first
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn log(&self, entry: AuditEntry) -> WalletResult<()> {
        let mut entries = self.entries.write().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire audit write lock: {}", e))
        })?;
        entries.push(entry);
        Ok(())
    }

    /// All entries in chronological order (oldest first)
    pub fn read_all(&self) -> WalletResult<Vec<AuditEntry>> {
        let entries = self.entries.read().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire audit read lock: {}", e))
        })?;
        Ok(entries.clone())
    }

    /// The most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> WalletResult<Vec<AuditEntry>> {
        let entries = self.entries.read().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire audit read lock: {}", e))
        })?;
        let start = entries.len().saturating_sub(count);
        Ok(entries[start..].to_vec())
    }

    pub fn entry_count(&self) -> WalletResult<usize> {
        let entries = self.entries.read().map_err(|e| {
            WalletError::Storage(format!("Failed to acquire audit read lock: {}", e))
        })?;
        Ok(entries.len())
    }
}
