//! Text-completion provider abstraction.
//!
//! The gateway only ever needs "send one prompt, get one text back", so the
//! provider trait is exactly that. Real traffic goes through
//! [`TogetherProvider`]; tests use [`FakeProvider`].

mod fake;
mod together;

pub use fake::FakeProvider;
pub use together::TogetherProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::config::GatewayConfig;

/// Error type for LLM operations.
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
}

/// Trait for LLM providers.
///
/// Implementations make exactly one request per call and never retry.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the LLM and get a text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "together", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name.
    fn model_name(&self) -> &str;
}

/// Build the production provider for a configuration.
pub fn create_provider(config: &GatewayConfig) -> Box<dyn LlmProvider> {
    Box::new(TogetherProvider::new(config))
}
