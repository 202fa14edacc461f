//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod subscription;

pub use account::{
    LoginUserCommand, LoginUserHandler, LoginUserResult, RegisterUserCommand,
    RegisterUserHandler, RegisterUserResult,
};
pub use subscription::{
    ListPlansHandler, ListPlansQuery, ListPlansResult, SubscribeToPlanCommand,
    SubscribeToPlanHandler, SubscribeToPlanResult,
};
