//! HTTP adapter for account endpoints.
//!
//! - `POST /register` - Create an account
//! - `POST /login` - Exchange credentials for an access token

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CredentialsRequest, LoginResponse};
pub use handlers::{AccountApiError, AccountAppState};
pub use routes::account_routes;
