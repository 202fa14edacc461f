//! Account handlers.
//!
//! ## Commands
//! - Registering a user
//! - Logging in (issues an access token)

mod login_user;
mod register_user;

pub use login_user::{LoginUserCommand, LoginUserHandler, LoginUserResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
