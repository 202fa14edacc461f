//! Request and response DTOs for plan and subscription endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::plan::SubscriptionPlan;

mod string_or_number {
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize_i64_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrNum {
            Num(i64),
            Str(String),
        }

        match Option::<StringOrNum>::deserialize(deserializer)? {
            Some(StringOrNum::Num(n)) => Ok(Some(n)),
            Some(StringOrNum::Str(s)) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("plan_id must be an integer, got {:?}", s))),
            None => Ok(None),
        }
    }
}

/// Body of `POST /subscribe`.
///
/// `plan_id` may be sent as a number or as an integer string (`"1"`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default, deserialize_with = "string_or_number::deserialize_i64_opt")]
    pub plan_id: Option<i64>,
}

/// One entry of `GET /plans`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<SubscriptionPlan> for PlanResponse {
    fn from(plan: SubscriptionPlan) -> Self {
        Self {
            id: plan.id.as_i64(),
            name: plan.name,
            price: plan.price,
        }
    }
}
