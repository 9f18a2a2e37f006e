//! Account credential repository for JSON storage
//!
//! Manages loading and saving sign-in credentials to accounts.json. Only
//! password hashes are stored; profiles live in the document store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ShopError;
use crate::models::UserId;
use crate::validation::normalize_email;

use super::file_io::{read_json, write_json_atomic};

/// Credentials of one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: UserId,
    /// Lowercased, trimmed email
    pub email: String,
    /// Argon2id PHC string
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_in: Option<DateTime<Utc>>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    accounts: RwLock<HashMap<UserId, AccountRecord>>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), ShopError> {
        let file_data: Vec<AccountRecord> = read_json(&self.path)?;

        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        accounts.clear();
        for account in file_data {
            accounts.insert(account.id, account);
        }

        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), ShopError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = accounts.values().cloned().collect();
        list.sort_by_key(|a| a.created_at);

        write_json_atomic(&self.path, &list)
    }

    /// Get an account by ID
    pub fn get(&self, id: UserId) -> Result<Option<AccountRecord>, ShopError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(accounts.get(&id).cloned())
    }

    /// Get an account by email (case-insensitive)
    pub fn get_by_email(&self, email: &str) -> Result<Option<AccountRecord>, ShopError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let email = normalize_email(email);
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    /// Insert or update an account
    pub fn upsert(&self, account: AccountRecord) -> Result<(), ShopError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        accounts.insert(account.id, account);
        Ok(())
    }

    /// Count accounts
    pub fn count(&self) -> Result<usize, ShopError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(accounts.len())
    }
}
