//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! `app` stitches them into the router the binary serves.

pub mod account;
pub mod app;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod subscription;

// Re-export key types for convenience
pub use account::{account_routes, AccountAppState};
pub use app::{app_router, build_app, AppState};
pub use response::MessageResponse;
pub use subscription::{subscription_routes, SubscriptionAppState};
