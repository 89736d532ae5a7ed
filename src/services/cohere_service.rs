use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::AppConfig;
use crate::services::llm_error::LlmError;

const COHERE_MODEL: &str = "command-r-plus";
const MAX_TOKENS: u32 = 200;

#[derive(Debug, Serialize)]
pub struct CohereGenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct CohereGenerateResponse {
    #[serde(default)]
    pub generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
pub struct Generation {
    pub text: String,
}

#[derive(Clone)]
pub struct CohereService {
    client: Client,
    api_key: Option<String>,
    api_base: String,
}

impl CohereService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.cohere_api_key.clone(),
            api_base: config.cohere_api_base.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingApiKey("COHERE_API_KEY"))?;
        let url = Url::parse(&self.api_base)?.join("v1/generate")?;

        let request = CohereGenerateRequest {
            model: COHERE_MODEL,
            prompt,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Status { status, body });
        }

        let body: CohereGenerateResponse = response.json().await?;
        body.generations
            .into_iter()
            .next()
            .map(|g| g.text)
            .ok_or(LlmError::EmptyResponse)
    }
}
