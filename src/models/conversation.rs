use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation, as sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Body of `POST /api/chat-plan`. The whole conversation is resent every time.
#[derive(Debug, Default, Deserialize)]
pub struct ChatPlanRequest {
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
}

impl ChatPlanRequest {
    pub fn conversation(&self) -> &[ChatMessage] {
        self.messages.as_deref().unwrap_or(&[])
    }
}
