//! Fake LLM provider for testing.
//!
//! This provider returns deterministic responses based on prompt matching,
//! allowing tests to run without network access or API costs. It also
//! records every prompt it receives so tests can assert on call counts.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring, in registration order. If no match is found, returns the
/// default response or an error.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// (prompt substring, response) pairs, first match wins
    responses: Mutex<Vec<(String, String)>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// When set, every call fails with this message
    failure: Option<String>,
    /// Prompts received so far
    prompts: Mutex<Vec<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Create a FakeProvider that answers every prompt with the same text.
    pub fn always(response: &str) -> Self {
        Self::new().with_default_response(response)
    }

    /// Create a FakeProvider whose every call fails like a dropped connection.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&self, prompt_contains: &str, response: &str) {
        lock(&self.responses).push((prompt_contains.to_string(), response.to_string()));
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of completed or failed calls so far.
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// All prompts received, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// The most recent prompt, if any.
    pub fn last_prompt(&self) -> Option<String> {
        lock(&self.prompts).last().cloned()
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        lock(&self.prompts).push(prompt.to_string());

        if let Some(message) = &self.failure {
            return Err(LlmError::RequestFailed(message.clone()));
        }

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        let responses = lock(&self.responses);
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_provider_matching() {
        let provider = FakeProvider::with_response("hello", "world");
        let result = provider.complete("Say hello to the user").await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_case_insensitive() {
        let provider = FakeProvider::with_response("HELLO", "world");
        let result = provider.complete("hello there").await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_first_match_wins() {
        let provider = FakeProvider::with_response("recipe", "first");
        provider.add_response("recipe", "second");
        assert_eq!(provider.complete("a recipe").await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_fake_provider_no_match() {
        let provider = FakeProvider::new();
        let result = provider.complete("random prompt").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_provider_default_response() {
        let provider = FakeProvider::always("default");
        let result = provider.complete("random prompt").await.unwrap();
        assert_eq!(result, "default");
    }

    #[tokio::test]
    async fn test_fake_provider_records_prompts() {
        let provider = FakeProvider::failing("connection reset");
        assert!(provider.complete("one").await.is_err());
        assert!(provider.complete("two").await.is_err());
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.last_prompt().as_deref(), Some("two"));
    }
}
