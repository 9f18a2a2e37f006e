//! Sign-in

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::backend::{read_as, Backend, Session};
use crate::error::{ShopError, ShopResult};
use crate::models::UserProfile;

use super::signup::USERS;

/// Service for signing existing users in
pub struct AuthService<'a, B: Backend + ?Sized> {
    backend: &'a B,
    audit: Option<&'a AuditLogger>,
}

impl<'a, B: Backend + ?Sized> AuthService<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            audit: None,
        }
    }

    /// Record sign-in attempts in `audit`
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Check credentials and open a session
    ///
    /// Rejected attempts are audited under the email that was tried.
    pub fn sign_in(&self, email: &str, password: &str) -> ShopResult<Session> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ShopError::Validation(
                "Email and password are required".into(),
            ));
        }

        match self.backend.authenticate(email, password) {
            Ok(session) => {
                if let Some(logger) = self.audit {
                    logger.log(&AuditEntry::account_event(
                        Operation::SignIn,
                        session.user_id.to_string(),
                        session.email.clone(),
                    ))?;
                }
                Ok(session)
            }
            Err(e @ ShopError::Authentication(_)) => {
                warn!(email, "sign-in rejected");
                if let Some(logger) = self.audit {
                    logger.log(&AuditEntry::account_event(
                        Operation::SignInRejected,
                        email,
                        email,
                    ))?;
                }
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// The profile stored for a signed-in user
    pub fn profile(&self, session: &Session) -> ShopResult<Option<UserProfile>> {
        read_as(self.backend, USERS, &session.user_id.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::EntityType;
    use crate::backend::local::tests::open_backend;
    use tempfile::TempDir;

    #[test]
    fn test_sign_in_success_is_audited() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let id = backend.create_account("ada@example.com", "Abc123!@").unwrap();

        let service = AuthService::new(&backend).with_audit(&logger);
        let session = service.sign_in(" ada@example.com ", "Abc123!@").unwrap();
        assert_eq!(session.user_id, id);

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::SignIn);
        assert_eq!(entries[0].entity_type, EntityType::Account);
    }

    #[test]
    fn test_rejected_sign_in_is_audited() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        backend.create_account("ada@example.com", "Abc123!@").unwrap();

        let service = AuthService::new(&backend).with_audit(&logger);
        let err = service.sign_in("ada@example.com", "nope").unwrap_err();
        assert!(matches!(err, ShopError::Authentication(_)));

        let entries = logger.read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::SignInRejected);
        assert_eq!(entries[0].entity_id, "ada@example.com");
    }

    #[test]
    fn test_blank_credentials() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let service = AuthService::new(&backend);

        assert!(service.sign_in("  ", "x").unwrap_err().is_validation());
        assert!(service.sign_in("a@b.co", "").unwrap_err().is_validation());
    }

    #[test]
    fn test_profile_missing_until_signup_writes_it() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        backend.create_account("ada@example.com", "Abc123!@").unwrap();

        let service = AuthService::new(&backend);
        let session = service.sign_in("ada@example.com", "Abc123!@").unwrap();
        assert!(service.profile(&session).unwrap().is_none());
    }
}
