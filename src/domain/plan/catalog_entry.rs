//! SubscriptionPlan catalog entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlanId, ValidationError};

/// A catalog row describing a subscribable offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: PlanId,
    pub name: String,
    pub price: f64,
}

impl SubscriptionPlan {
    /// Maximum name length, matching the `VARCHAR(50)` column.
    pub const MAX_NAME_LENGTH: usize = 50;

    /// Creates a plan, rejecting blank names and negative or non-finite prices.
    pub fn new(id: PlanId, name: impl Into<String>, price: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let length = name.chars().count();
        if length > Self::MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", Self::MAX_NAME_LENGTH, length));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::invalid_format(
                "price",
                format!("must be a non-negative amount, got {}", price),
            ));
        }
        Ok(Self { id, name, price })
    }

    /// True for zero-priced plans.
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}
