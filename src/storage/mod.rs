//! Storage layer for Shopfront
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each backend project gets its own directory under `data/`.

pub mod accounts;
pub mod documents;
pub mod file_io;

pub use accounts::{AccountRecord, AccountRepository};
pub use documents::DocumentRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::ShopPaths;
use crate::error::ShopError;

/// Storage coordinator for one backend project
pub struct Storage {
    paths: ShopPaths,
    project_id: String,
    pub accounts: AccountRepository,
    pub documents: DocumentRepository,
}

impl Storage {
    /// Create a new Storage instance for `project_id`
    pub fn new(paths: ShopPaths, project_id: &str) -> Result<Self, ShopError> {
        paths.ensure_directories()?;
        std::fs::create_dir_all(paths.project_dir(project_id))
            .map_err(|e| ShopError::Io(format!("Failed to create project directory: {}", e)))?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file(project_id)),
            documents: DocumentRepository::new(paths.documents_file(project_id)),
            project_id: project_id.to_string(),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ShopPaths {
        &self.paths
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), ShopError> {
        self.accounts.load()?;
        self.documents.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ShopError> {
        self.accounts.save()?;
        self.documents.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, "demo").unwrap();

        assert!(temp_dir.path().join("data").join("demo").exists());
        assert_eq!(storage.project_id(), "demo");
        storage.load_all().unwrap();
        storage.save_all().unwrap();
        assert!(temp_dir.path().join("data/demo/accounts.json").exists());
        assert!(temp_dir.path().join("data/demo/documents.json").exists());
    }
}
