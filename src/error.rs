//! Custom error types for Shopfront
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The sign-up engine and the field validators
//! never produce these: they report problems through their return values.

use thiserror::Error;

/// The main error type for Shopfront operations
#[derive(Error, Debug)]
pub enum ShopError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Wrong credentials or unknown account
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Backend collaborator errors (hashing, document encoding, ...)
    #[error("Backend error: {0}")]
    Backend(String),
}

impl ShopError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for sub-categories
    pub fn sub_category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "SubCategory",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for ShopError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Shopfront operations
pub type ShopResult<T> = Result<T, ShopError>;
