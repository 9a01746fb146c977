//! Per-session state: the selected recipe and the search result cache.
//!
//! One store belongs to one interactive session and is passed by reference
//! to whatever needs it. Nothing is persisted and nothing is evicted.

use std::collections::HashMap;

use crate::types::{Recipe, RecipeSeed};

/// What a finished search left behind: `None` when the response was
/// unusable, otherwise the (possibly empty) list of recipes.
pub type CachedResults = Option<Vec<Recipe>>;

#[derive(Debug, Default)]
pub struct SessionStore {
    selected: Option<RecipeSeed>,
    search_results: HashMap<String, CachedResults>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active selection.
    pub fn set_selected_recipe(&mut self, recipe: Option<RecipeSeed>) {
        tracing::debug!(
            title = recipe.as_ref().map(|r| r.title.as_str()),
            "Selected recipe changed"
        );
        self.selected = recipe;
    }

    pub fn selected_recipe(&self) -> Option<&RecipeSeed> {
        self.selected.as_ref()
    }

    /// Insert or overwrite the results for one query key.
    pub fn cache_results(&mut self, query: impl Into<String>, results: CachedResults) {
        self.search_results.insert(query.into(), results);
    }

    /// `None` means the query was never searched; `Some(None)` and
    /// `Some(Some(vec![]))` both mean it was searched without results.
    pub fn lookup_cached(&self, query: &str) -> Option<&CachedResults> {
        self.search_results.get(query)
    }

    /// Number of distinct queries cached this session.
    pub fn cached_queries(&self) -> usize {
        self.search_results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            id: None,
            title: title.to_string(),
            summary: "S".to_string(),
            ingredients: vec![],
            procedure_summary: "P".to_string(),
            procedure_steps: vec![],
        }
    }

    #[test]
    fn test_selection() {
        let mut store = SessionStore::new();
        assert!(store.selected_recipe().is_none());

        store.set_selected_recipe(Some(recipe("Soup").to_seed()));
        assert_eq!(store.selected_recipe().unwrap().title, "Soup");

        store.set_selected_recipe(None);
        assert!(store.selected_recipe().is_none());
    }

    #[test]
    fn test_lookup_distinguishes_unseen_from_empty() {
        let mut store = SessionStore::new();
        assert!(store.lookup_cached("eggs").is_none());

        store.cache_results("eggs", Some(vec![]));
        assert_eq!(store.lookup_cached("eggs"), Some(&Some(vec![])));

        store.cache_results("flour", None);
        assert_eq!(store.lookup_cached("flour"), Some(&None));
    }

    #[test]
    fn test_cache_overwrites_without_merging() {
        let mut store = SessionStore::new();
        store.cache_results("eggs", Some(vec![recipe("Omelette"), recipe("Frittata")]));
        store.cache_results("eggs", Some(vec![recipe("Shakshuka")]));

        let cached = store.lookup_cached("eggs").unwrap().as_ref().unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].title, "Shakshuka");
        assert_eq!(store.cached_queries(), 1);
    }
}
