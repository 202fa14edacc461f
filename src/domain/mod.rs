//! Domain layer containing business types and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, auth types, errors)
//! - `user` - Registered accounts and credentials
//! - `plan` - Subscription plan catalog
//! - `subscription` - User-to-plan subscriptions

pub mod foundation;
pub mod plan;
pub mod subscription;
pub mod user;
