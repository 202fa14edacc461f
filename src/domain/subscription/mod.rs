//! Subscription module - links between users and plans.
//!
//! A subscription starts on the day it is created, has no end date and is
//! active. Nothing in this service renews, cancels or expires one, and a user
//! may hold any number of subscriptions to the same plan.

mod enrollment;
mod errors;

pub use enrollment::{NewSubscription, UserSubscription};
pub use errors::SubscriptionError;
