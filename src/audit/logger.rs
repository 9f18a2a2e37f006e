//! Append-only JSONL audit log
//!
//! One entry per line, flushed on every write so a crashed sign-up still
//! leaves the account creation on record.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{ShopError, ShopResult};

use super::entry::{AuditEntry, EntityType};

/// Writes account and catalog events to the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the log
    pub fn log(&self, entry: &AuditEntry) -> ShopResult<()> {
        let line = serde_json::to_string(entry).map_err(|e| {
            ShopError::Json(format!(
                "Failed to record {} event for {}: {}",
                entry.entity_type, entry.entity_id, e
            ))
        })?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;
        writeln!(file, "{}", line).map_err(|e| self.io_error("append to", e))?;
        file.flush().map_err(|e| self.io_error("flush", e))
    }

    /// Every recorded entry, oldest first; a missing log reads as empty
    pub fn read_all(&self) -> ShopResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(|e| self.io_error("open", e))?;
        let mut entries = Vec::new();

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                ShopError::Json(format!("Corrupt audit entry at line {}: {}", index + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> ShopResult<Vec<AuditEntry>> {
        self.read_recent_of(count, None)
    }

    /// The last `count` entries about one kind of entity, or about any kind
    pub fn read_recent_of(
        &self,
        count: usize,
        entity_type: Option<EntityType>,
    ) -> ShopResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        if let Some(kind) = entity_type {
            entries.retain(|entry| entry.entity_type == kind);
        }
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> ShopError {
        ShopError::Io(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.log_path.display(),
            e
        ))
    }
}
