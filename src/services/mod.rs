pub mod auth_token;
pub mod cohere_service;
pub mod gemini_service;
pub mod hotel_catalog;
pub mod llm_error;
pub mod plan_normalizer;
pub mod prompts;
pub mod user_store;
