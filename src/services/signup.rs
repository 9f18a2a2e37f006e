//! Sign-up completion
//!
//! Turns a finished [`StepFormEngine`] into an account plus a profile
//! document.

use tracing::info;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::backend::{read_as, write_as, Backend};
use crate::error::{ShopError, ShopResult};
use crate::models::{UserId, UserProfile};
use crate::signup::{Field, StepFormEngine};
use crate::validation::normalize_email;

/// Collection holding [`UserProfile`] documents
pub const USERS: &str = "users";

/// Service that registers users from a completed sign-up form
pub struct SignupService<'a, B: Backend + ?Sized> {
    backend: &'a B,
    audit: Option<&'a AuditLogger>,
}

impl<'a, B: Backend + ?Sized> SignupService<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            audit: None,
        }
    }

    /// Record account and profile creation in `audit`
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Create the account and store the profile
    ///
    /// Every step of `engine` is re-checked first, so a form that never
    /// reached [`AdvanceOutcome::Complete`](crate::signup::AdvanceOutcome)
    /// is refused. The password comes from the engine's seed.
    pub fn complete(&self, engine: &StepFormEngine) -> ShopResult<UserProfile> {
        let mut check = engine.clone();
        for index in 0..check.steps().len() {
            if !check.validate_step(index) {
                let step = check.steps()[index];
                let message = check
                    .errors()
                    .iter()
                    .map(|(_, message)| message.to_string())
                    .next()
                    .unwrap_or_default();
                return Err(ShopError::Validation(format!(
                    "Step '{}' is incomplete: {}",
                    step.title, message
                )));
            }
        }

        let password = engine
            .password()
            .ok_or_else(|| ShopError::Validation("A password is required to sign up".into()))?;

        let form = engine.form_state();
        let email = normalize_email(form.get(Field::Email));
        let user_id = self.backend.create_account(&email, password)?;
        let profile = UserProfile::from_form(user_id, form);
        write_as(self.backend, USERS, &user_id.key(), &profile)?;

        if let Some(logger) = self.audit {
            logger.log(&AuditEntry::account_event(
                Operation::Create,
                user_id.to_string(),
                profile.email.clone(),
            ))?;
            logger.log(&AuditEntry::create(
                EntityType::UserProfile,
                user_id.to_string(),
                Some(profile.name.clone()),
                &profile,
            ))?;
        }

        info!(user = %user_id, "registered user");
        Ok(profile)
    }

    /// Load a stored profile
    pub fn profile(&self, user_id: UserId) -> ShopResult<Option<UserProfile>> {
        read_as(self.backend, USERS, &user_id.key())
    }
}
