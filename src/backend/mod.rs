//! Backend collaborator: authentication and document storage
//!
//! The sign-up engine never talks to a backend. Services receive one through
//! the [`Backend`] trait, so a hosted provider, the bundled file-backed
//! [`LocalBackend`], or a test double can be plugged in.

pub mod credentials;
pub mod local;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{ShopError, ShopResult};
use crate::models::UserId;

pub use credentials::HashParams;
pub use local::LocalBackend;

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Capabilities the application needs from its backend
pub trait Backend {
    /// Check credentials and open a session
    fn authenticate(&self, email: &str, password: &str) -> ShopResult<Session>;

    /// Register a new email/password account
    fn create_account(&self, email: &str, password: &str) -> ShopResult<UserId>;

    /// Fetch one document, `None` if it does not exist
    fn read_document(&self, collection: &str, id: &str) -> ShopResult<Option<Value>>;

    /// Create or replace one document
    fn write_document(&self, collection: &str, id: &str, value: Value) -> ShopResult<()>;

    /// All documents of a collection as (id, value) pairs
    fn list_documents(&self, collection: &str) -> ShopResult<Vec<(String, Value)>>;
}

/// Read a document and decode it into `T`
pub fn read_as<T, B>(backend: &B, collection: &str, id: &str) -> ShopResult<Option<T>>
where
    T: DeserializeOwned,
    B: Backend + ?Sized,
{
    backend
        .read_document(collection, id)?
        .map(|value| {
            serde_json::from_value(value).map_err(|e| {
                ShopError::Backend(format!("Malformed document {}/{}: {}", collection, id, e))
            })
        })
        .transpose()
}

/// Encode `value` and write it as a document
pub fn write_as<T, B>(backend: &B, collection: &str, id: &str, value: &T) -> ShopResult<()>
where
    T: Serialize,
    B: Backend + ?Sized,
{
    let value = serde_json::to_value(value)?;
    backend.write_document(collection, id, value)
}

/// Decode every document of a collection into `T`
pub fn list_as<T, B>(backend: &B, collection: &str) -> ShopResult<Vec<T>>
where
    T: DeserializeOwned,
    B: Backend + ?Sized,
{
    backend
        .list_documents(collection)?
        .into_iter()
        .map(|(id, value)| {
            serde_json::from_value(value).map_err(|e| {
                ShopError::Backend(format!("Malformed document {}/{}: {}", collection, id, e))
            })
        })
        .collect()
}
