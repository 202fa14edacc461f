//! Subscription handlers.
//!
//! ## Commands
//! - Subscribing the authenticated user to a plan
//!
//! ## Queries
//! - Listing the plan catalog

mod list_plans;
mod subscribe_to_plan;

// Commands
pub use subscribe_to_plan::{
    SubscribeToPlanCommand, SubscribeToPlanHandler, SubscribeToPlanResult,
};

// Queries
pub use list_plans::{ListPlansHandler, ListPlansQuery, ListPlansResult};
