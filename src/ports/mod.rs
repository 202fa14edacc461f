//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Insert and look up registered users
//! - `PlanReader` - Read the plan catalog
//! - `SubscriptionRepository` - Insert and list user subscriptions
//!
//! ## Credential and Token Ports
//!
//! - `PasswordHasher` - Salted one-way password hashing
//! - `TokenIssuer` - Sign bearer tokens at login
//! - `SessionValidator` - Verify bearer tokens on protected routes

mod password_hasher;
mod plan_reader;
mod session_validator;
mod subscription_repository;
mod token_issuer;
mod user_repository;

pub use password_hasher::PasswordHasher;
pub use plan_reader::PlanReader;
pub use session_validator::SessionValidator;
pub use subscription_repository::SubscriptionRepository;
pub use token_issuer::TokenIssuer;
pub use user_repository::UserRepository;
