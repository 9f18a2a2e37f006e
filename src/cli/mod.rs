//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod auth;
pub mod catalog;
pub mod signup;
pub mod validate;

pub use audit::{handle_audit_command, AuditArgs};
pub use auth::{handle_signin_command, SigninArgs};
pub use catalog::{handle_catalog_command, CatalogCommands};
pub use signup::{handle_signup_command, run_steps, FlowEnd, SignupArgs};
pub use validate::{handle_validate_command, ValidateCommands};
