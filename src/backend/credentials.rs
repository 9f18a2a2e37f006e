//! Password hashing using Argon2id
//!
//! Account passwords are never stored; only PHC-format Argon2id hashes are.
//! The hash string carries its own salt and cost parameters, so verification
//! works regardless of the parameters currently configured.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{ShopError, ShopResult};

/// Cost parameters for new hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    /// Memory cost in KiB
    pub memory_cost: u32,
    /// Number of passes
    pub time_cost: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_cost: 19 * 1024,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl HashParams {
    /// Minimal-cost parameters so tests stay fast
    #[cfg(test)]
    pub fn light() -> Self {
        Self {
            memory_cost: 8,
            time_cost: 1,
            parallelism: 1,
        }
    }

    fn argon2(&self) -> ShopResult<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| ShopError::Backend(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str, params: &HashParams) -> ShopResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = params
        .argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ShopError::Backend(format!("Password hashing failed: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC hash
pub fn verify_password(password: &str, stored_hash: &str) -> ShopResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| ShopError::Backend(format!("Stored password hash is invalid: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
