//! Plan module - the catalog of subscribable offerings.
//!
//! Plans are seeded and administered out of band; this service only reads
//! them.

mod catalog_entry;

pub use catalog_entry::SubscriptionPlan;
