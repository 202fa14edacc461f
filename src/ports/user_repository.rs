//! User repository port.
//!
//! Defines the contract for persisting and looking up registered users.
//!
//! # Design
//!
//! - **Insert-only**: users are never updated or deleted through this service
//! - **Unique constraint**: username uniqueness is enforced by the store, and
//!   a violation is reported as `ErrorCode::DuplicateUsername`
//!
//! # Example
//!
//! ```ignore
//! async fn register(repo: &dyn UserRepository, new_user: NewUser) -> Result<User, DomainError> {
//!     if repo.exists_by_username(&new_user.username).await? {
//!         return Err(DomainError::new(ErrorCode::DuplicateUsername, "taken"));
//!     }
//!     repo.create(&new_user).await
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::{NewUser, User, Username};

/// Repository port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// - `DuplicateUsername` if the username is already taken
    /// - `DatabaseError` on persistence failure
    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError>;

    /// Find a user by exact username.
    ///
    /// Returns `None` if no such user is registered.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, DomainError>;

    /// Check whether a username is already registered.
    async fn exists_by_username(&self, username: &Username) -> Result<bool, DomainError>;
}
