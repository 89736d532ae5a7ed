use thiserror::Error;

/// Failures talking to a generative-model provider.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Provider returned no text")]
    EmptyResponse,
    #[error("Failed to parse model output: {0}")]
    MalformedContent(#[from] serde_json::Error),
}
