use crate::error::GatewayError;
use crate::gateway::{Outcome, RecipeGateway};
use crate::session::SessionStore;
use crate::types::{Recipe, SearchQuery};

/// Results currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView<'a> {
    pub recipes: &'a [Recipe],
    /// True when the results came from the session cache.
    pub from_cache: bool,
}

/// Search screen: current query and the suggestions shown for it.
#[derive(Debug, Default)]
pub struct SearchPage {
    current_query: Option<SearchQuery>,
    recipes: Vec<Recipe>,
}

impl SearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_query(&self) -> Option<&SearchQuery> {
        self.current_query.as_ref()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Run a search, answering from the session cache when possible.
    ///
    /// An empty keyword clears the screen without calling the gateway. A
    /// rejected response is cached as "no results". A failed call caches an
    /// empty list before the error is returned, so the same query is not
    /// retried for the rest of the session.
    pub async fn perform(
        &mut self,
        gateway: &RecipeGateway,
        store: &mut SessionStore,
        query: SearchQuery,
    ) -> Result<SearchView<'_>, GatewayError> {
        if query.is_empty() {
            self.current_query = None;
            self.recipes.clear();
            return Ok(SearchView {
                recipes: &self.recipes,
                from_cache: false,
            });
        }

        let key = query.cache_key();

        if let Some(cached) = store.lookup_cached(&key) {
            tracing::debug!(query = %key, "Using cached search results");
            self.recipes = cached.clone().unwrap_or_default();
            self.current_query = Some(query);
            return Ok(SearchView {
                recipes: &self.recipes,
                from_cache: true,
            });
        }

        self.recipes.clear();
        let result = gateway.search_recipes(&query).await;
        self.current_query = Some(query);

        match result {
            Ok(Outcome::Parsed(recipes)) => {
                store.cache_results(key.as_str(), Some(recipes.clone()));
                tracing::debug!(
                    query = %key,
                    count = recipes.len(),
                    cached_queries = store.cached_queries(),
                    "Cached search results"
                );
                self.recipes = recipes;
            }
            Ok(Outcome::Invalid(_)) => {
                store.cache_results(key.as_str(), None);
                tracing::debug!(
                    query = %key,
                    cached_queries = store.cached_queries(),
                    "Cached unusable search as no results"
                );
            }
            Err(err) => {
                tracing::warn!(query = %key, error = %err, "Search failed");
                store.cache_results(key, Some(Vec::new()));
                return Err(err);
            }
        }

        Ok(SearchView {
            recipes: &self.recipes,
            from_cache: false,
        })
    }

    /// Make the recipe at `index` the session's selection.
    pub fn select<'a>(&'a self, store: &mut SessionStore, index: usize) -> Option<&'a Recipe> {
        let recipe = self.recipes.get(index)?;
        store.set_selected_recipe(Some(recipe.to_seed()));
        Some(recipe)
    }
}
