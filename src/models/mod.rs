pub mod conversation;
pub mod hotel;
pub mod itinerary;
pub mod packing;
pub mod prompt;
pub mod user;

use serde::{Deserialize, Serialize};

/// Body used by every `{error: "..."}` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
