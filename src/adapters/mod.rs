//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Argon2 password hashing and JWT issuing/validation
//! - `http` - axum REST surface
//! - `memory` - In-memory stores for tests and local runs
//! - `postgres` - sqlx-backed persistence

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{Argon2PasswordHasher, JwtTokenService};
pub use memory::InMemoryStore;
