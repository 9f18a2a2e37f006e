//! File-backed backend
//!
//! Implements [`Backend`] on top of the JSON [`Storage`] of one project.
//! Every write is saved to disk before the call returns.

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::credentials::{hash_password, verify_password, HashParams};
use super::{Backend, Session};
use crate::config::{BackendSettings, ShopPaths};
use crate::error::{ShopError, ShopResult};
use crate::models::UserId;
use crate::storage::{AccountRecord, Storage};
use crate::validation::{normalize_email, validate_email};

/// Backend that keeps accounts and documents in local JSON files
pub struct LocalBackend {
    storage: Storage,
    hash_params: HashParams,
}

impl LocalBackend {
    /// Open the project named in `settings`, loading existing data
    pub fn open(paths: ShopPaths, settings: &BackendSettings) -> ShopResult<Self> {
        settings.validate()?;
        if settings.api_key.is_none() {
            debug!("no API key configured; the local backend does not need one");
        }

        let storage = Storage::new(paths, settings.project_id.trim())?;
        storage.load_all()?;
        debug!(project = storage.project_id(), "opened local backend");

        Ok(Self {
            storage,
            hash_params: HashParams::default(),
        })
    }

    /// Use different Argon2 costs for newly created accounts
    pub fn with_hash_params(mut self, params: HashParams) -> Self {
        self.hash_params = params;
        self
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

fn check_collection(collection: &str) -> ShopResult<()> {
    if collection.trim().is_empty() {
        return Err(ShopError::Validation("Collection name cannot be empty".into()));
    }
    Ok(())
}

impl Backend for LocalBackend {
    fn authenticate(&self, email: &str, password: &str) -> ShopResult<Session> {
        let mut account = self
            .storage
            .accounts
            .get_by_email(email)?
            .ok_or_else(|| ShopError::Authentication("Invalid email or password".into()))?;

        if !verify_password(password, &account.password_hash)? {
            warn!(email = %account.email, "rejected sign-in with wrong password");
            return Err(ShopError::Authentication("Invalid email or password".into()));
        }

        let now = Utc::now();
        account.last_sign_in = Some(now);
        let session = Session {
            user_id: account.id,
            email: account.email.clone(),
            signed_in_at: now,
        };
        self.storage.accounts.upsert(account)?;
        self.storage.accounts.save()?;

        info!(user = %session.user_id, "signed in");
        Ok(session)
    }

    fn create_account(&self, email: &str, password: &str) -> ShopResult<UserId> {
        let email = normalize_email(email);
        if !validate_email(&email) {
            return Err(ShopError::Validation(format!("Invalid email address: {}", email)));
        }
        if password.is_empty() {
            return Err(ShopError::Validation("Password cannot be empty".into()));
        }
        if self.storage.accounts.get_by_email(&email)?.is_some() {
            return Err(ShopError::Duplicate {
                entity_type: "Account",
                identifier: email,
            });
        }

        let record = AccountRecord {
            id: UserId::new(),
            email,
            password_hash: hash_password(password, &self.hash_params)?,
            created_at: Utc::now(),
            last_sign_in: None,
        };
        let id = record.id;

        self.storage.accounts.upsert(record)?;
        self.storage.accounts.save()?;

        info!(user = %id, "created account");
        Ok(id)
    }

    fn read_document(&self, collection: &str, id: &str) -> ShopResult<Option<Value>> {
        check_collection(collection)?;
        self.storage.documents.get(collection, id)
    }

    fn write_document(&self, collection: &str, id: &str, value: Value) -> ShopResult<()> {
        check_collection(collection)?;
        if id.trim().is_empty() {
            return Err(ShopError::Validation("Document id cannot be empty".into()));
        }

        self.storage.documents.put(collection, id, value)?;
        self.storage.documents.save()?;
        debug!(collection, id, "wrote document");
        Ok(())
    }

    fn list_documents(&self, collection: &str) -> ShopResult<Vec<(String, Value)>> {
        check_collection(collection)?;
        self.storage.documents.list(collection)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::backend::{list_as, read_as, write_as};
    use serde_json::json;
    use tempfile::TempDir;

    pub(crate) fn open_backend(temp_dir: &TempDir) -> LocalBackend {
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());
        LocalBackend::open(paths, &BackendSettings::default())
            .unwrap()
            .with_hash_params(HashParams::light())
    }

    #[test]
    fn test_create_then_authenticate() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);

        let id = backend.create_account("Ada@Example.com", "Abc123!@").unwrap();
        let session = backend.authenticate("ada@example.com", "Abc123!@").unwrap();

        assert_eq!(session.user_id, id);
        assert_eq!(session.email, "ada@example.com");
        let record = backend.storage().accounts.get(id).unwrap().unwrap();
        assert!(record.last_sign_in.is_some());
        assert!(!record.password_hash.contains("Abc123!@"));
    }

    #[test]
    fn test_wrong_password_and_unknown_email() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        backend.create_account("ada@example.com", "Abc123!@").unwrap();

        assert!(matches!(
            backend.authenticate("ada@example.com", "wrong"),
            Err(ShopError::Authentication(_))
        ));
        assert!(matches!(
            backend.authenticate("bob@example.com", "Abc123!@"),
            Err(ShopError::Authentication(_))
        ));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        backend.create_account("ada@example.com", "Abc123!@").unwrap();

        let err = backend
            .create_account(" ADA@example.com", "Other123!")
            .unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_create_account_validates_input() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);

        assert!(backend.create_account("not-an-email", "Abc123!@").unwrap_err().is_validation());
        assert!(backend.create_account("ada@example.com", "").unwrap_err().is_validation());
    }

    #[test]
    fn test_accounts_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        open_backend(&temp_dir)
            .create_account("ada@example.com", "Abc123!@")
            .unwrap();

        let reopened = open_backend(&temp_dir);
        assert!(reopened.authenticate("ada@example.com", "Abc123!@").is_ok());
    }

    #[test]
    fn test_documents_round_trip_through_disk() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        backend
            .write_document("users", "u1", json!({"name": "Ada"}))
            .unwrap();

        let reopened = open_backend(&temp_dir);
        assert_eq!(
            reopened.read_document("users", "u1").unwrap(),
            Some(json!({"name": "Ada"}))
        );
        assert_eq!(reopened.list_documents("users").unwrap().len(), 1);
    }

    #[test]
    fn test_typed_helpers() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Banner {
            text: String,
        }

        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let banner = Banner {
            text: "Sale".into(),
        };
        write_as(&backend, "banners", "home", &banner).unwrap();

        let read: Option<Banner> = read_as(&backend, "banners", "home").unwrap();
        assert_eq!(read, Some(banner));

        backend
            .write_document("banners", "broken", json!(42))
            .unwrap();
        assert!(list_as::<Banner, _>(&backend, "banners").is_err());
    }

    #[test]
    fn test_rejects_empty_names() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        assert!(backend.write_document("", "x", json!(1)).is_err());
        assert!(backend.write_document("users", " ", json!(1)).is_err());
        assert!(backend.list_documents(" ").is_err());
    }

    #[test]
    fn test_projects_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut other = BackendSettings::default();
        other.project_id = "other".into();

        let a = open_backend(&temp_dir);
        a.write_document("users", "u1", json!(1)).unwrap();

        let b = LocalBackend::open(paths, &other).unwrap();
        assert_eq!(b.read_document("users", "u1").unwrap(), None);
    }
}
