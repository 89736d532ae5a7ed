use std::env;
use std::path::PathBuf;

pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 5000;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
const COHERE_API_BASE: &str = "https://api.cohere.ai";
const HOTELS_CSV_PATH: &str = "data/india_hotels.csv";
const JWT_SECRET: &str = "default_secret";

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub cohere_api_key: Option<String>,
    pub cohere_api_base: String,
    pub hotels_csv_path: PathBuf,
    pub jwt_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(PORT);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port,
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| GEMINI_API_BASE.to_string()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| GEMINI_MODEL.to_string()),
            cohere_api_key: non_empty_var("COHERE_API_KEY"),
            cohere_api_base: env::var("COHERE_API_BASE")
                .unwrap_or_else(|_| COHERE_API_BASE.to_string()),
            hotels_csv_path: env::var("HOTELS_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(HOTELS_CSV_PATH)),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| JWT_SECRET.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            gemini_api_key: None,
            gemini_api_base: GEMINI_API_BASE.to_string(),
            gemini_model: GEMINI_MODEL.to_string(),
            cohere_api_key: None,
            cohere_api_base: COHERE_API_BASE.to_string(),
            hotels_csv_path: PathBuf::from(HOTELS_CSV_PATH),
            jwt_secret: JWT_SECRET.to_string(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
