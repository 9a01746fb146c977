use thiserror::Error;

use crate::config::ConfigError;
use crate::llm::LlmError;

/// A failure to obtain a response at all.
///
/// These propagate to the caller; the gateway never retries.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Completion request failed: {0}")]
    Llm(#[from] LlmError),
}

/// A response that arrived but does not have the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("Response is JSON but not a single object")]
    NotAnObject,

    #[error("Response does not match the recipe schema: {0}")]
    Schema(String),

    #[error("Recipe {index} in the batch does not match the recipe schema: {message}")]
    BatchElement { index: usize, message: String },

    #[error("Response has no \"recipes\" array")]
    MissingRecipes,

    #[error("Response is empty")]
    EmptyResponse,
}
