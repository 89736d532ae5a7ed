use serde::{Deserialize, Serialize};

/// Body of the raw `/api/gemini` and `/api/cohere` pass-through routes.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}
