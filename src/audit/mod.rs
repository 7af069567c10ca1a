//! Audit trail for wallet commands
//!
//! Records every create, update and delete that goes through the service
//! layer. The trail is held in memory next to the repositories.
//!
//! # Example
//!
//! ```rust,ignore
//! use wallet_cli::audit::{AuditEntry, AuditLog, EntityType};
//!
//! let log = AuditLog::new();
//! log.log(AuditEntry::create(EntityType::Card, card.id().to_string(), Some(card.name().into())))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLog;
