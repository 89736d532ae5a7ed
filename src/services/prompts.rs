use serde_json::Value;

use crate::models::conversation::ChatMessage;
use crate::models::itinerary::GenerateTripRequest;
use crate::models::packing::PackingListRequest;

const CHAT_PLAN_INSTRUCTIONS: &str = r#"
You are VoyageMate, a friendly AI travel planner.
When the user gives their preferences, your response MUST be valid JSON (no extra text) in the following shape:

{
  "assistant_message": "<short natural sentence reply to user>",
  "plan": {
    "destination": "<destination string>",
    "days": <number>,
    "itinerary": [
      {
        "day": <number>,
        "title": "<title>",
        "activities": ["<activity1>", "<activity2>"],
        "food_suggestions": "<string>"
      }
    ]
  }
}

If you cannot produce a full 'plan' yet, set "plan": null and still provide "assistant_message".
Only output JSON with those keys. Do not include any explanation outside JSON.
"#;

/// Instruction template followed by the JSON-encoded conversation.
pub fn chat_plan_prompt(conversation: &[ChatMessage]) -> String {
    let conversation_text =
        serde_json::to_string(conversation).unwrap_or_else(|_| "[]".to_string());
    format!(
        "{}\n\nConversation:\n{}",
        CHAT_PLAN_INSTRUCTIONS, conversation_text
    )
}

pub fn trip_prompt(request: &GenerateTripRequest) -> String {
    let destination = request.destination();
    let days = request.days();
    format!(
        r#"
Plan a detailed travel itinerary for a {days}-day trip to {destination}.
Your response MUST be a JSON object only (no leading/trailing text). Format:
{{
  "destination": "{destination}",
  "days": {days},
  "itinerary": [
    {{
      "day": 1,
      "title": "Title for day 1",
      "activities": ["activity1","activity2"],
      "food_suggestions": "some suggestion"
    }}
  ]
}}
"#
    )
}

pub fn packing_list_prompt(request: &PackingListRequest) -> String {
    format!(
        r#"
You are an expert travel packer. Generate a detailed, categorized packing list.
Trip Details: {}, {} days, Activities: {}, Season: {}
Response: JSON with "packingList" key -> array of {{ category, items:[{{text, packed:false}}] }}
"#,
        request.destination.as_deref().unwrap_or_default(),
        display_value(request.duration.as_ref()),
        display_value(request.activities.as_ref()),
        request.season.as_deref().unwrap_or_default(),
    )
}

// Form fields arrive as strings, numbers or lists depending on the client.
fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| display_value(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}
