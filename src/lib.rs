//! Shopfront - storefront sign-up flow, validators and catalog admin
//!
//! This library provides the core of the Shopfront command-line client: a
//! multi-step sign-up form engine, the standalone field validators it builds
//! on, and the services that register users and manage the product catalog
//! through a pluggable backend.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `signup`: Step definitions, form state and the step form engine
//! - `validation`: Pure field validators and password strength scoring
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Profiles and catalog entities
//! - `backend`: Backend trait and the file-backed implementation
//! - `storage`: JSON file storage used by the local backend
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`, `cli`: Terminal formatting and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront::signup::{AdvanceOutcome, Field, SignupSeed, StepFormEngine};
//!
//! let mut engine = StepFormEngine::signup(SignupSeed::new("ada@example.com", password));
//! engine.update_field(Field::Name, "Ada");
//! assert_eq!(engine.advance(), AdvanceOutcome::Advanced);
//! ```

pub mod audit;
pub mod backend;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod signup;
pub mod storage;
pub mod validation;

pub use error::ShopError;
