use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_DESTINATION: &str = "your destination";
pub const DEFAULT_DAYS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub food_suggestions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryPlan {
    pub destination: String,
    pub days: u32,
    pub itinerary: Vec<DayPlan>,
}

/// What `/api/chat-plan` always answers with.
///
/// `plan` is kept as raw JSON: whatever the model put there is handed to the
/// client untouched, even when it does not look like an [`ItineraryPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPlanResponse {
    pub assistant_message: Option<String>,
    pub plan: Option<Value>,
}

impl ChatPlanResponse {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            assistant_message: Some(text.into()),
            plan: None,
        }
    }
}

/// Body of `POST /api/generate-trip`. `days` arrives as a number or a string
/// depending on the form the client used.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateTripRequest {
    pub destination: Option<String>,
    pub days: Option<Value>,
}

impl GenerateTripRequest {
    pub fn destination(&self) -> &str {
        self.destination
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEFAULT_DESTINATION)
    }

    pub fn days(&self) -> u32 {
        let days: Option<u32> = match &self.days {
            Some(Value::Number(n)) => n.as_u64().and_then(|d| u32::try_from(d).ok()),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        days.filter(|d| *d > 0).unwrap_or(DEFAULT_DAYS)
    }
}
