//! Audit logging system for Shopfront
//!
//! Records account creation, sign-in attempts and catalog writes in an
//! append-only, line-delimited JSON log.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Category,
//!     category.id.to_string(),
//!     Some(category.name.clone()),
//!     &category,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
