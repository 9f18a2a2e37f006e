//! Schemaless document repository for JSON storage
//!
//! Documents are JSON values addressed by collection name and document id,
//! saved together in documents.json as `{ collection: { id: value } }`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::ShopError;

use super::file_io::{read_json, write_json_atomic};

type Collections = BTreeMap<String, BTreeMap<String, Value>>;

/// Repository for document persistence
pub struct DocumentRepository {
    path: PathBuf,
    collections: RwLock<Collections>,
}

impl DocumentRepository {
    /// Create a new document repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            collections: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load documents from disk
    pub fn load(&self) -> Result<(), ShopError> {
        let file_data: Collections = read_json(&self.path)?;

        let mut collections = self
            .collections
            .write()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *collections = file_data;

        Ok(())
    }

    /// Save documents to disk
    pub fn save(&self) -> Result<(), ShopError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*collections)
    }

    /// Get one document
    pub fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, ShopError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    /// Insert or replace one document
    pub fn put(&self, collection: &str, id: &str, value: Value) -> Result<(), ShopError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), value);
        Ok(())
    }

    /// All documents of a collection, ordered by id
    pub fn list(&self, collection: &str) -> Result<Vec<(String, Value)>, ShopError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default())
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> Result<usize, ShopError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| ShopError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(collections.get(collection).map_or(0, BTreeMap::len))
    }
}
