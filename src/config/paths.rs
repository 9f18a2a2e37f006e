//! Path management for Shopfront
//!
//! Provides platform-aware path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `SHOPFRONT_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/shopfront` on Linux, `%APPDATA%\shopfront` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ShopError;

/// Manages all paths used by Shopfront
#[derive(Debug, Clone)]
pub struct ShopPaths {
    /// Base directory for all Shopfront data
    base_dir: PathBuf,
}

impl ShopPaths {
    /// Create a new ShopPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ShopError> {
        let base_dir = if let Ok(custom) = std::env::var("SHOPFRONT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ShopPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the data directory of one backend project (`<base>/data/<project>/`)
    pub fn project_dir(&self, project_id: &str) -> PathBuf {
        self.data_dir().join(project_id)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to a project's accounts.json
    pub fn accounts_file(&self, project_id: &str) -> PathBuf {
        self.project_dir(project_id).join("accounts.json")
    }

    /// Get the path to a project's documents.json
    pub fn documents_file(&self, project_id: &str) -> PathBuf {
        self.project_dir(project_id).join("documents.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ShopError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ShopError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ShopError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ShopError> {
    ProjectDirs::from("", "", "shopfront")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShopError::Config("Could not determine a home directory".into()))
}
