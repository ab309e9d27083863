//! Generative provider abstraction for the recipe pipeline.
//!
//! The pipeline never talks to a backend directly; it is handed an
//! [`LlmProvider`] so the real Gemini client can be swapped for a
//! deterministic fake in tests.

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider call timed out after {0} seconds")]
    Timeout(u64),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for generative text providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for the API call and for returning the model's raw text reply,
/// which the pipeline treats as untrusted.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the provider and get a raw text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Default model when `SOUS_AI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Create a provider from environment configuration.
///
/// - `SOUS_PROVIDER`: "gemini" (default) | "fake"
/// - `GEMINI_API_KEY`: API key, required for the gemini provider
/// - `SOUS_AI_MODEL`: model name (default: "gemini-2.5-flash")
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("SOUS_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "gemini" => {
            let api_key = std::env::var("GEMINI_API_KEY")
                .map_err(|_| LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;
            let model =
                std::env::var("SOUS_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
            Ok(Box::new(GeminiProvider::new(api_key, model)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
