use std::collections::BTreeMap;

use crate::error::GatewayError;
use crate::gateway::{Outcome, RecipeGateway};
use crate::session::SessionStore;
use crate::types::{InfoKey, Recipe};

/// Answers shown under one ingredient or step.
///
/// The first entry answers the item itself; each later entry answers a
/// follow-up question asked about the entry before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoThread {
    answers: Vec<String>,
}

impl InfoThread {
    fn new(answer: String) -> Self {
        Self {
            answers: vec![answer],
        }
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// The answer the next follow-up builds on.
    pub fn latest(&self) -> &str {
        self.answers.last().map(String::as_str).unwrap_or_default()
    }
}

/// Recipe detail screen.
#[derive(Debug, Default)]
pub struct RecipePage {
    recipe: Option<Recipe>,
    additional_info: BTreeMap<InfoKey, InfoThread>,
    has_fetched: bool,
}

impl RecipePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn info(&self, key: InfoKey) -> Option<&InfoThread> {
        self.additional_info.get(&key)
    }

    pub fn additional_info(&self) -> impl Iterator<Item = (&InfoKey, &InfoThread)> {
        self.additional_info.iter()
    }

    /// Generate the full recipe for the session's selection.
    ///
    /// Calls the gateway at most once per page; later calls return whether a
    /// recipe is on screen without asking again. Returns `false` when nothing
    /// is selected or the response was unusable.
    pub async fn load(
        &mut self,
        gateway: &RecipeGateway,
        store: &SessionStore,
    ) -> Result<bool, GatewayError> {
        if self.has_fetched {
            return Ok(self.recipe.is_some());
        }

        let Some(seed) = store.selected_recipe() else {
            self.recipe = None;
            return Ok(false);
        };

        self.has_fetched = true;
        self.recipe = gateway.generate_recipe(seed).await?.ok();
        Ok(self.recipe.is_some())
    }

    /// Ask about the ingredient or step `key` points at and keep the answer.
    ///
    /// A new answer replaces any earlier thread for the same key. Returns
    /// `None` when there is no such item or the response was unusable.
    pub async fn ask(
        &mut self,
        gateway: &RecipeGateway,
        key: InfoKey,
    ) -> Result<Option<&InfoThread>, GatewayError> {
        let Some(recipe) = &self.recipe else {
            return Ok(None);
        };
        let Some(text) = recipe.text_for(key) else {
            return Ok(None);
        };

        match gateway.ask_about_ingredient_or_step(text, recipe).await? {
            Outcome::Parsed(answer) => {
                self.additional_info.insert(key, InfoThread::new(answer));
                Ok(self.additional_info.get(&key))
            }
            Outcome::Invalid(_) => Ok(None),
        }
    }

    /// Ask a follow-up on the latest answer under `key`.
    ///
    /// Needs an existing answer to build on.
    pub async fn follow_up(
        &mut self,
        gateway: &RecipeGateway,
        key: InfoKey,
        question: &str,
    ) -> Result<Option<&str>, GatewayError> {
        let (Some(recipe), Some(thread)) = (&self.recipe, self.additional_info.get(&key)) else {
            return Ok(None);
        };
        if question.trim().is_empty() {
            return Ok(None);
        }

        let outcome = gateway
            .ask_follow_up(question.trim(), recipe, thread.latest())
            .await?;

        match (outcome, self.additional_info.get_mut(&key)) {
            (Outcome::Parsed(answer), Some(thread)) => {
                thread.answers.push(answer);
                Ok(thread.answers.last().map(String::as_str))
            }
            _ => Ok(None),
        }
    }

    /// Remove the entry under `key`, follow-ups included.
    pub fn discard(&mut self, key: InfoKey) -> bool {
        self.additional_info.remove(&key).is_some()
    }

    /// Remove the follow-up at `depth` and every follow-up after it.
    ///
    /// Depth 0 is the original answer, so it discards the whole entry.
    pub fn discard_follow_ups(&mut self, key: InfoKey, depth: usize) -> bool {
        if depth == 0 {
            return self.discard(key);
        }
        match self.additional_info.get_mut(&key) {
            Some(thread) if depth < thread.answers.len() => {
                thread.answers.truncate(depth);
                true
            }
            _ => false,
        }
    }

    /// Replace the whole recipe with a version that has `change_request` applied.
    ///
    /// On success all additional info is cleared, since it described the old
    /// recipe. On an unusable response the current recipe stays.
    pub async fn apply_change(
        &mut self,
        gateway: &RecipeGateway,
        change_request: &str,
    ) -> Result<bool, GatewayError> {
        let Some(recipe) = &self.recipe else {
            return Ok(false);
        };
        if change_request.trim().is_empty() {
            return Ok(false);
        }

        match gateway
            .regenerate_recipe(recipe, change_request.trim())
            .await?
        {
            Outcome::Parsed(updated) => {
                self.recipe = Some(updated);
                self.additional_info.clear();
                Ok(true)
            }
            Outcome::Invalid(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_thread(answers: &[&str]) -> (RecipePage, InfoKey) {
        let key = InfoKey::ingredient(0);
        let mut page = RecipePage::new();
        page.additional_info.insert(
            key,
            InfoThread {
                answers: answers.iter().map(|a| a.to_string()).collect(),
            },
        );
        (page, key)
    }

    #[test]
    fn test_discard_follow_ups() {
        let (mut page, key) = page_with_thread(&["a", "b", "c"]);

        assert!(page.discard_follow_ups(key, 2));
        assert_eq!(page.info(key).unwrap().answers(), &["a", "b"]);

        assert!(!page.discard_follow_ups(key, 5));

        assert!(page.discard_follow_ups(key, 0));
        assert!(page.info(key).is_none());
    }

    #[test]
    fn test_discard_missing_key() {
        let mut page = RecipePage::new();
        assert!(!page.discard(InfoKey::step(1)));
    }

    #[test]
    fn test_latest() {
        let (page, key) = page_with_thread(&["first", "second"]);
        assert_eq!(page.info(key).unwrap().latest(), "second");
    }
}
