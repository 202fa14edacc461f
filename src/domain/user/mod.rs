//! User module - registered accounts and their credentials.
//!
//! - `Username` - validated, unique login name
//! - `PasswordHash` - salted one-way hash, never the plaintext
//! - `User` / `NewUser` - persisted and not-yet-persisted accounts
//! - `UserError` - registration and login failures

mod account;
mod errors;
mod username;

pub use account::{NewUser, PasswordHash, User};
pub use errors::UserError;
pub use username::Username;
