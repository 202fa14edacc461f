//! Credential port for salted one-way password hashing.
//!
//! Hashing is CPU-bound and synchronous. Callers on the async runtime should
//! move calls onto the blocking pool.

use crate::domain::foundation::AuthError;
use crate::domain::user::PasswordHash;

/// Hashes and verifies passwords.
///
/// # Contract
///
/// - `hash` uses a fresh random salt, so hashing the same password twice
///   yields different strings
/// - `verify` returns `Ok(false)` for a wrong password and reserves `Err`
///   for unparseable hashes or internal failures
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<PasswordHash, AuthError>;

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, AuthError>;
}
