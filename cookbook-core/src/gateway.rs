//! Prompt/response gateway in front of the completion provider.
//!
//! Each operation renders one prompt, makes exactly one provider call and
//! validates the text that comes back. Provider failures are returned as
//! `Err`; responses with the wrong shape come back as `Ok(Outcome::Invalid)`
//! after being logged.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, ValidationError};
use crate::llm::{create_provider, LlmProvider};
use crate::prompts::ask::{ASK_PROMPT_NAME, FOLLOW_UP_PROMPT_NAME};
use crate::prompts::generate::GENERATE_PROMPT_NAME;
use crate::prompts::regenerate::REGENERATE_PROMPT_NAME;
use crate::prompts::search::SEARCH_PROMPT_NAME;
use crate::prompts::{
    render_ask_prompt, render_follow_up_prompt, render_generate_prompt,
    render_regenerate_prompt, render_search_prompt,
};
use crate::schema::{parse_prose, parse_recipe, parse_recipe_batch};
use crate::types::{Recipe, RecipeSeed, SearchQuery};

/// Result of a call whose response did arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The response had the expected shape.
    Parsed(T),
    /// The response did not; nothing usable came back.
    Invalid(ValidationError),
}

impl<T> Outcome<T> {
    /// Collapse to "usable or not".
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Parsed(value) => Some(value),
            Outcome::Invalid(_) => None,
        }
    }
}

impl<T> From<Result<T, ValidationError>> for Outcome<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(value) => Outcome::Parsed(value),
            Err(err) => Outcome::Invalid(err),
        }
    }
}

pub type GatewayResult<T> = Result<Outcome<T>, GatewayError>;

/// Builds prompts, calls the provider once, and validates the answer.
#[derive(Debug, Clone)]
pub struct RecipeGateway {
    provider: Arc<dyn LlmProvider>,
}

impl RecipeGateway {
    /// Create a gateway from environment configuration.
    ///
    /// Fails before any request is made when the credential is missing.
    pub fn from_env() -> Result<Self, GatewayError> {
        let config = GatewayConfig::from_env()?;
        Ok(Self::from_config(&config))
    }

    /// Like [`RecipeGateway::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = GatewayConfig::from_lookup(lookup)?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            provider: Arc::from(create_provider(config)),
        }
    }

    /// Create a gateway over any provider.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// The provider every call goes through.
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    async fn call<T>(
        &self,
        prompt_name: &str,
        prompt: String,
        validate: impl FnOnce(&str) -> Result<T, ValidationError>,
    ) -> GatewayResult<T> {
        tracing::debug!(
            prompt_name = prompt_name,
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            "Calling completion API"
        );

        let content = self.provider.complete(&prompt).await?;

        let outcome = Outcome::from(validate(&content));
        if let Outcome::Invalid(err) = &outcome {
            tracing::warn!(
                prompt_name = prompt_name,
                error = %err,
                response_len = content.len(),
                "Discarding completion that failed validation"
            );
            tracing::debug!(prompt_name = prompt_name, response = %content, "Rejected completion");
        }
        Ok(outcome)
    }

    /// Expand a seed into a fully detailed recipe.
    pub async fn generate_recipe(&self, seed: &RecipeSeed) -> GatewayResult<Recipe> {
        let prompt = render_generate_prompt(seed);
        self.call(GENERATE_PROMPT_NAME, prompt, parse_recipe).await
    }

    /// Suggest recipes for a keyword and optional style filters.
    ///
    /// One malformed suggestion rejects the whole batch.
    pub async fn search_recipes(&self, query: &SearchQuery) -> GatewayResult<Vec<Recipe>> {
        let prompt = render_search_prompt(query);
        let outcome = self
            .call(SEARCH_PROMPT_NAME, prompt, parse_recipe_batch)
            .await?;

        if let Outcome::Parsed(recipes) = &outcome {
            tracing::info!(
                query = %query.cache_key(),
                count = recipes.len(),
                "Recipe search completed"
            );
        }
        Ok(outcome)
    }

    /// Short prose answer about one ingredient or step.
    pub async fn ask_about_ingredient_or_step(
        &self,
        text: &str,
        recipe: &Recipe,
    ) -> GatewayResult<String> {
        let prompt = render_ask_prompt(text, recipe);
        self.call(ASK_PROMPT_NAME, prompt, parse_prose).await
    }

    /// Short prose answer to a question about a previous answer.
    pub async fn ask_follow_up(
        &self,
        question: &str,
        recipe: &Recipe,
        prior_answer: &str,
    ) -> GatewayResult<String> {
        let prompt = render_follow_up_prompt(question, recipe, prior_answer);
        self.call(FOLLOW_UP_PROMPT_NAME, prompt, parse_prose).await
    }

    /// Produce a complete replacement recipe with the requested change applied.
    pub async fn regenerate_recipe(
        &self,
        original: &Recipe,
        change_request: &str,
    ) -> GatewayResult<Recipe> {
        let prompt = render_regenerate_prompt(original, change_request);
        self.call(REGENERATE_PROMPT_NAME, prompt, parse_recipe).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_ok() {
        assert_eq!(Outcome::Parsed(3).ok(), Some(3));
        assert_eq!(
            Outcome::<i32>::Invalid(ValidationError::EmptyResponse).ok(),
            None
        );
    }

    #[test]
    fn test_outcome_from_result() {
        let outcome: Outcome<()> = Err(ValidationError::NotAnObject).into();
        assert_eq!(outcome, Outcome::Invalid(ValidationError::NotAnObject));

        let outcome: Outcome<u8> = Ok(4).into();
        assert_eq!(outcome, Outcome::Parsed(4));
    }
}
