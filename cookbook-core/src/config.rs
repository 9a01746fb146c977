//! Gateway configuration from environment variables.

use std::env;
use thiserror::Error;

/// Name of the required credential variable.
pub const API_KEY_VAR: &str = "TOGETHER_API_KEY";

/// Default Together base URL (OpenAI-compatible).
pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo";

/// Default completion budget per request.
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Gateway configuration.
#[derive(Clone)]
pub struct GatewayConfig {
    /// API key for the completion endpoint.
    pub api_key: String,
    /// Model name (e.g., "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature; `None` leaves the provider default.
    pub temperature: Option<f32>,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GatewayConfig {
    /// Configuration with the given key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar(API_KEY_VAR.to_string()));
        }

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `TOGETHER_API_KEY`: API key for the completion endpoint
    ///
    /// Optional:
    /// - `COOKBOOK_AI_MODEL`: Model name
    /// - `COOKBOOK_AI_BASE_URL`: API base URL (default: "https://api.together.xyz/v1")
    /// - `COOKBOOK_AI_MAX_TOKENS`: Completion budget (default: 2048)
    /// - `COOKBOOK_AI_TEMPERATURE`: Sampling temperature (default: unset)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(API_KEY_VAR.to_string()))?;

        let mut config = Self::new(api_key)?;

        if let Some(model) = lookup("COOKBOOK_AI_MODEL") {
            config.model = model;
        }

        if let Some(base_url) = lookup("COOKBOOK_AI_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup("COOKBOOK_AI_MAX_TOKENS") {
            config.max_tokens = parse_var("COOKBOOK_AI_MAX_TOKENS", &raw)?;
        }

        if let Some(raw) = lookup("COOKBOOK_AI_TEMPERATURE") {
            config.temperature = Some(parse_var("COOKBOOK_AI_TEMPERATURE", &raw)?);
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: raw.to_string(),
    })
}
