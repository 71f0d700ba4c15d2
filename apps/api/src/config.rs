use anyhow::{Context, Result};

use crate::llm_client;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hugging Face access token used for all Inference API calls.
    pub hf_token: String,
    pub model_id: String,
    pub hf_api_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hf_token: require_env("HF_TOKEN")?,
            model_id: std::env::var("MODEL_ID")
                .unwrap_or_else(|_| llm_client::DEFAULT_MODEL.to_string()),
            hf_api_base: std::env::var("HF_API_BASE")
                .unwrap_or_else(|_| llm_client::DEFAULT_API_BASE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
