//! Turns whatever the model replied to a chat-plan prompt into a
//! [`ChatPlanResponse`].
//!
//! The model is asked for JSON only but does not always comply, so the reply
//! goes through a fixed chain of attempts and the first usable result wins:
//!
//! 1. no text at all: fixed apology
//! 2. strict parse of the whole reply
//! 3. salvage parse of a trailing `{...}` block
//! 4. the raw reply as the assistant message

use serde_json::{Map, Value};

use crate::models::itinerary::ChatPlanResponse;

pub const NO_RESPONSE_MESSAGE: &str = "Sorry, I didn't get a response from the AI.";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Sorry, I encountered an error.";

pub fn normalize_reply(reply: Option<&str>) -> ChatPlanResponse {
    let text = match reply {
        Some(text) if !text.is_empty() => text,
        _ => return ChatPlanResponse::message(NO_RESPONSE_MESSAGE),
    };

    strict_parse(text)
        .or_else(|| salvage_parse(text))
        .unwrap_or_else(|| ChatPlanResponse::message(text))
}

/// Reply used when the provider call itself failed.
pub fn upstream_failure() -> ChatPlanResponse {
    ChatPlanResponse::message(UPSTREAM_ERROR_MESSAGE)
}

fn strict_parse(text: &str) -> Option<ChatPlanResponse> {
    let value: Value = serde_json::from_str(text).ok()?;
    usable(value)
}

/// Tries every `{` in order and parses from there to the end of the reply.
/// Only blocks that close the reply (trailing whitespace aside) qualify.
fn salvage_parse(text: &str) -> Option<ChatPlanResponse> {
    let body = text.trim_end();
    if !body.ends_with('}') {
        return None;
    }

    body.match_indices('{').find_map(|(start, _)| {
        serde_json::from_str::<Value>(&body[start..])
            .ok()
            .and_then(usable)
    })
}

/// Any parsed value except `null` is a result. Values without the envelope
/// keys come back with both fields empty.
fn usable(value: Value) -> Option<ChatPlanResponse> {
    match value {
        Value::Null => None,
        Value::String(message) => Some(ChatPlanResponse::message(message)),
        Value::Object(fields) => Some(from_envelope(fields)),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) => Some(ChatPlanResponse {
            assistant_message: None,
            plan: None,
        }),
    }
}

fn from_envelope(mut fields: Map<String, Value>) -> ChatPlanResponse {
    let assistant_message = match fields.remove("assistant_message") {
        None | Some(Value::Null) => None,
        Some(Value::String(message)) => Some(message),
        Some(other) => Some(other.to_string()),
    };
    let plan = fields.remove("plan").filter(|plan| !plan.is_null());

    ChatPlanResponse {
        assistant_message,
        plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_or_empty_reply() {
        assert_eq!(
            normalize_reply(None),
            ChatPlanResponse::message(NO_RESPONSE_MESSAGE)
        );
        assert_eq!(
            normalize_reply(Some("")),
            ChatPlanResponse::message(NO_RESPONSE_MESSAGE)
        );
    }

    #[test]
    fn test_well_formed_envelope_passes_through() {
        let reply = json!({
            "assistant_message": "Here you go",
            "plan": {"destination": "Goa", "days": 2, "itinerary": []}
        })
        .to_string();
        let response = normalize_reply(Some(&reply));
        assert_eq!(response.assistant_message.as_deref(), Some("Here you go"));
        assert_eq!(
            response.plan,
            Some(json!({"destination": "Goa", "days": 2, "itinerary": []}))
        );
    }

    #[test]
    fn test_message_without_plan() {
        let response = normalize_reply(Some(r#"{"assistant_message":"How many days?","plan":null}"#));
        assert_eq!(response, ChatPlanResponse::message("How many days?"));
    }

    #[test]
    fn test_plan_without_message() {
        let response = normalize_reply(Some(r#"{"plan":{"destination":"Pune"}}"#));
        assert_eq!(response.assistant_message, None);
        assert_eq!(response.plan, Some(json!({"destination": "Pune"})));
    }

    #[test]
    fn test_malformed_plan_is_not_validated() {
        let response = normalize_reply(Some(r#"{"assistant_message":"ok","plan":[1,2,3]}"#));
        assert_eq!(response.plan, Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_bare_json_string() {
        let response = normalize_reply(Some(r#""Where would you like to go?""#));
        assert_eq!(response, ChatPlanResponse::message("Where would you like to go?"));
    }

    #[test]
    fn test_trailing_block_after_prose() {
        let reply = r#"Sure! Here is what I came up with:
{"assistant_message":"Here's your Goa plan","plan":{"destination":"Goa","days":3,"itinerary":[{"day":1,"title":"Beaches","activities":["Baga"],"food_suggestions":"Fish thali"}]}}
"#;
        let response = normalize_reply(Some(reply));
        assert_eq!(
            response.assistant_message.as_deref(),
            Some("Here's your Goa plan")
        );
        assert_eq!(response.plan.unwrap()["itinerary"][0]["title"], "Beaches");
    }

    #[test]
    fn test_braces_in_prose_before_block() {
        let reply = r#"Use {curly} braces carefully. {"assistant_message":"hi","plan":null}"#;
        assert_eq!(normalize_reply(Some(reply)), ChatPlanResponse::message("hi"));
    }

    #[test]
    fn test_unparseable_reply_returns_raw_text() {
        let reply = "I think you should visit Jaipur in winter.";
        assert_eq!(normalize_reply(Some(reply)), ChatPlanResponse::message(reply));

        let broken = r#"Here: {"assistant_message": "oops", "plan": {"days": 3"#;
        assert_eq!(normalize_reply(Some(broken)), ChatPlanResponse::message(broken));
    }

    #[test]
    fn test_json_without_envelope_keys_is_empty_response() {
        let empty = ChatPlanResponse {
            assistant_message: None,
            plan: None,
        };
        for reply in ["{}", r#"{"foo":1}"#, "42", "[1,2]", "true"] {
            assert_eq!(normalize_reply(Some(reply)), empty, "reply: {}", reply);
        }
    }

    #[test]
    fn test_json_null_falls_back_to_raw_text() {
        assert_eq!(normalize_reply(Some("null")), ChatPlanResponse::message("null"));
    }

    #[test]
    fn test_trailing_empty_object_after_prose() {
        let response = normalize_reply(Some("Nothing to plan yet {}"));
        assert_eq!(response.assistant_message, None);
        assert_eq!(response.plan, None);
    }

    #[test]
    fn test_non_string_message_is_stringified() {
        let response = normalize_reply(Some(r#"{"assistant_message": 7}"#));
        assert_eq!(response.assistant_message.as_deref(), Some("7"));
    }
}
