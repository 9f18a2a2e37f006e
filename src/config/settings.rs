//! User settings for Shopfront
//!
//! Holds the backend connection settings (never compiled into the binary) and
//! sign-up preferences.

use serde::{Deserialize, Serialize};

use super::paths::ShopPaths;
use crate::error::ShopError;

/// Environment variable overriding [`BackendSettings::api_key`]
pub const API_KEY_ENV: &str = "SHOPFRONT_API_KEY";
/// Environment variable overriding [`BackendSettings::project_id`]
pub const PROJECT_ID_ENV: &str = "SHOPFRONT_PROJECT_ID";
/// Environment variable overriding [`BackendSettings::auth_domain`]
pub const AUTH_DOMAIN_ENV: &str = "SHOPFRONT_AUTH_DOMAIN";

/// Connection settings for the backend collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// API key issued by the backend provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Domain used for authentication requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,

    /// Project identifier; selects the data namespace
    #[serde(default = "default_project_id")]
    pub project_id: String,

    /// Bucket for uploaded media (category images and the like)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
}

fn default_project_id() -> String {
    "shopfront-local".to_string()
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            auth_domain: None,
            project_id: default_project_id(),
            storage_bucket: None,
        }
    }
}

impl BackendSettings {
    /// Check that the settings can address a project
    pub fn validate(&self) -> Result<(), ShopError> {
        let id = self.project_id.trim();
        if id.is_empty() {
            return Err(ShopError::Config("Backend project_id cannot be empty".into()));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ShopError::Config(format!(
                "Backend project_id '{}' may only contain letters, digits, '-' and '_'",
                id
            )));
        }
        Ok(())
    }

    /// The API key with everything but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        match &self.api_key {
            None => "(not set)".to_string(),
            Some(key) => {
                let chars: Vec<char> = key.chars().collect();
                let visible = chars.len().min(4);
                let tail: String = chars[chars.len() - visible..].iter().collect();
                format!("{}{}", "*".repeat(chars.len() - visible), tail)
            }
        }
    }
}

/// User settings for Shopfront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Backend connection settings
    #[serde(default)]
    pub backend: BackendSettings,

    /// Run the calendar check on the date-of-birth step instead of a presence check
    #[serde(default)]
    pub strict_date_of_birth: bool,

    /// Dialling prefix shown in front of the phone step
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Whether catalog and account writes are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_country_code() -> String {
    "+92".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backend: BackendSettings::default(),
            strict_date_of_birth: false,
            country_code: default_country_code(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    ///
    /// Environment overrides are applied on top of whatever was loaded.
    pub fn load_or_create(paths: &ShopPaths) -> Result<Self, ShopError> {
        let settings_path = paths.settings_file();

        let mut settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ShopError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str(&contents)
                .map_err(|e| ShopError::Config(format!("Failed to parse settings file: {}", e)))?
        } else {
            // Don't save yet - let caller decide when to persist
            Settings::default()
        };

        settings.apply_overrides(|key| std::env::var(key).ok());
        settings.backend.validate()?;
        Ok(settings)
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.backend.api_key = Some(key);
        }
        if let Some(project) = lookup(PROJECT_ID_ENV).filter(|v| !v.is_empty()) {
            self.backend.project_id = project;
        }
        if let Some(domain) = lookup(AUTH_DOMAIN_ENV).filter(|v| !v.is_empty()) {
            self.backend.auth_domain = Some(domain);
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ShopPaths) -> Result<(), ShopError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ShopError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| ShopError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.backend.project_id, "shopfront-local");
        assert!(settings.backend.api_key.is_none());
        assert!(!settings.strict_date_of_birth);
        assert_eq!(settings.country_code, "+92");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.strict_date_of_birth = true;
        settings.backend.project_id = "storefront-test".into();
        settings.save(&paths).unwrap();

        let mut loaded: Settings =
            serde_json::from_str(&std::fs::read_to_string(paths.settings_file()).unwrap())
                .unwrap();
        loaded.apply_overrides(|_| None);
        assert!(loaded.strict_date_of_birth);
        assert_eq!(loaded.backend.project_id, "storefront-test");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.backend.project_id, "shopfront-local");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_overrides() {
        let mut settings = Settings::default();
        settings.apply_overrides(|key| match key {
            API_KEY_ENV => Some("secret-key-1234".to_string()),
            PROJECT_ID_ENV => Some("prod".to_string()),
            AUTH_DOMAIN_ENV => Some(String::new()),
            _ => None,
        });

        assert_eq!(settings.backend.api_key.as_deref(), Some("secret-key-1234"));
        assert_eq!(settings.backend.project_id, "prod");
        assert!(settings.backend.auth_domain.is_none());
    }

    #[test]
    fn test_project_id_validation() {
        let mut backend = BackendSettings::default();
        assert!(backend.validate().is_ok());

        backend.project_id = "  ".into();
        assert!(backend.validate().is_err());

        backend.project_id = "../escape".into();
        assert!(backend.validate().is_err());
    }

    #[test]
    fn test_masked_api_key() {
        let mut backend = BackendSettings::default();
        assert_eq!(backend.masked_api_key(), "(not set)");

        backend.api_key = Some("abcdef123456".into());
        assert_eq!(backend.masked_api_key(), "********3456");

        backend.api_key = Some("abc".into());
        assert_eq!(backend.masked_api_key(), "abc");
    }
}
