//! Authentication adapters.
//!
//! Implementations of the `PasswordHasher`, `TokenIssuer` and
//! `SessionValidator` ports:
//!
//! - `argon2_hasher` - Argon2id password hashing
//! - `jwt` - HS256 access tokens signed with the configured secret
//! - `mock` - Test implementations that skip cryptography

mod argon2_hasher;
mod jwt;
mod mock;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::JwtTokenService;
pub use mock::{MockSessionValidator, MockTokenIssuer};
