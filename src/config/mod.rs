//! Configuration module for Shopfront
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - Settings persistence with environment overrides for backend secrets

pub mod paths;
pub mod settings;

pub use paths::ShopPaths;
pub use settings::{BackendSettings, Settings};
