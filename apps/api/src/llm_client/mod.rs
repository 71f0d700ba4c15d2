/// Generation client: the single point of entry for all Hugging Face
/// Inference API calls in the studio.
///
/// ARCHITECTURAL RULE: No other module may call the Inference API directly.
/// All model interactions MUST go through this module.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default hosted model, matching the studio's instruct checkpoint.
pub const DEFAULT_MODEL: &str = "google/gemma-2b-it";
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";

/// Nucleus sampling cutoff. Fixed; the UI exposes temperature only.
const TOP_P: f64 = 0.9;
const MAX_RETRIES: u32 = 3;

pub const DEFAULT_MAX_NEW_TOKENS: u32 = 1024;
pub const MAX_NEW_TOKENS_CAP: u32 = 2048;

/// Bounds of the UI creativity slider.
pub const TEMPERATURE_MIN: f32 = 0.5;
pub const TEMPERATURE_MAX: f32 = 1.5;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model still loading after {retries} retries")]
    ModelLoading { retries: u32 },

    #[error("rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("model returned empty output")]
    EmptyContent,
}

/// Sampling parameters the host may vary per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenParams {
    pub temperature: f32,
    pub max_new_tokens: u32,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

/// The text-generation seam. `AppState` holds an `Arc<dyn TextGenerator>`
/// so tests can swap in a canned generator without touching handlers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, params: GenParams) -> Result<String, GenError>;
}

#[derive(Debug, Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
}

#[derive(Debug, Serialize)]
struct HfParameters {
    temperature: f32,
    top_p: f64,
    max_new_tokens: u32,
    do_sample: bool,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct HfGeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct HfErrorBody {
    error: String,
}

/// The Inference API client used by all handlers.
/// Wraps text-generation calls with retry and backoff.
#[derive(Clone)]
pub struct HfClient {
    client: Client,
    base_url: String,
    model_id: String,
    token: String,
}

impl HfClient {
    pub fn new(token: String, model_id: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            model_id,
            token,
        }
    }

    /// Makes a raw generation call. Retries on 429 (rate limit), 503 (cold
    /// model still loading) and other 5xx responses with exponential backoff.
    async fn call(&self, prompt: &str, params: GenParams) -> Result<String, GenError> {
        let url = format!("{}/models/{}", self.base_url, self.model_id);
        let request_body = HfRequest {
            inputs: prompt,
            parameters: HfParameters {
                temperature: params.temperature,
                top_p: TOP_P,
                max_new_tokens: params.max_new_tokens.min(MAX_NEW_TOKENS_CAP),
                do_sample: true,
                return_full_text: false,
            },
        };

        let mut last_error: Option<GenError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "generation attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.token)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(GenError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if retryable(status.as_u16()) {
                let body = response.text().await.unwrap_or_default();
                warn!("Inference API returned {}: {}", status, body);
                last_error = Some(match status.as_u16() {
                    429 => GenError::RateLimited {
                        retries: MAX_RETRIES,
                    },
                    503 => GenError::ModelLoading {
                        retries: MAX_RETRIES,
                    },
                    s => GenError::Api {
                        status: s,
                        message: body,
                    },
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<HfErrorBody>(&body)
                    .map(|e| e.error)
                    .unwrap_or(body);
                return Err(GenError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let outputs: Vec<HfGeneratedText> = response.json().await?;
            let text = outputs
                .into_iter()
                .next()
                .map(|o| o.generated_text)
                .unwrap_or_default();
            let text = text.trim();

            if text.is_empty() {
                return Err(GenError::EmptyContent);
            }

            debug!(
                "generation succeeded: {} chars at temperature {}",
                text.chars().count(),
                params.temperature
            );

            return Ok(text.to_string());
        }

        Err(last_error.unwrap_or(GenError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl TextGenerator for HfClient {
    async fn generate(&self, prompt: &str, params: GenParams) -> Result<String, GenError> {
        self.call(prompt, params).await
    }
}

/// 429 and 5xx are transient; everything else fails fast.
fn retryable(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_match_studio_defaults() {
        let params = GenParams::default();
        assert_eq!(params.temperature, 1.0);
        assert_eq!(params.max_new_tokens, DEFAULT_MAX_NEW_TOKENS);
    }

    #[test]
    fn test_request_body_shape() {
        let body = HfRequest {
            inputs: "a prompt",
            parameters: HfParameters {
                temperature: 0.9,
                top_p: TOP_P,
                max_new_tokens: 256,
                do_sample: true,
                return_full_text: false,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["inputs"], "a prompt");
        assert_eq!(json["parameters"]["top_p"], 0.9);
        assert_eq!(json["parameters"]["max_new_tokens"], 256);
        assert_eq!(json["parameters"]["do_sample"], true);
        assert_eq!(json["parameters"]["return_full_text"], false);
    }

    #[test]
    fn test_generated_text_response_parses() {
        let outputs: Vec<HfGeneratedText> =
            serde_json::from_str(r#"[{"generated_text": "Once upon a time"}]"#).unwrap();
        assert_eq!(outputs[0].generated_text, "Once upon a time");
    }

    #[test]
    fn test_error_body_parses() {
        let body: HfErrorBody = serde_json::from_str(
            r#"{"error": "Authorization header is correct, but the token seems invalid"}"#,
        )
        .unwrap();
        assert!(body.error.contains("token"));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(retryable(429));
        assert!(retryable(500));
        assert!(retryable(503));
        assert!(!retryable(200));
        assert!(!retryable(400));
        assert!(!retryable(401));
        assert!(!retryable(404));
    }

    #[test]
    fn test_temperature_bounds_cover_slider_range() {
        assert!(TEMPERATURE_MIN < TEMPERATURE_MAX);
        assert!((TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&1.0));
    }
}
