//! Argon2id password hashing adapter.
//!
//! Produces self-describing PHC strings (`$argon2id$v=19$m=...`), so the
//! algorithm parameters and salt travel with the stored hash and verification
//! keeps working after the cost settings change.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as PhcHash, PasswordHasher as _, PasswordVerifier as _,
        SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::domain::foundation::AuthError;
use crate::domain::user::PasswordHash;
use crate::ports::PasswordHasher;

/// Argon2id implementation of the `PasswordHasher` port.
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Hasher with the smallest permitted cost, for tests and local tooling.
    pub fn low_cost() -> Self {
        let params = Params::new(
            Params::MIN_M_COST,
            Params::MIN_T_COST,
            Params::MIN_P_COST,
            None,
        )
        .unwrap_or_default();

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::CredentialHashing(format!("Failed to hash password: {}", e)))?;

        Ok(PasswordHash::from_phc(hash.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, AuthError> {
        let parsed = PhcHash::new(hash.as_str()).map_err(|e| {
            AuthError::CredentialHashing(format!("Invalid password hash format: {}", e))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::CredentialHashing(format!(
                "Password verification error: {}",
                e
            ))),
        }
    }
}
