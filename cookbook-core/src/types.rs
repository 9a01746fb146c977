use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Minimal recipe stub used to ask for a fully detailed recipe.
///
/// Comes from a search result or from manual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSeed {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

/// Fully detailed recipe.
///
/// Serialized with the field names the completion model is asked to emit,
/// so the same shape is used on the wire and in recipe files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "descriptionItems")]
    pub summary: String,
    #[serde(rename = "items")]
    pub ingredients: Vec<String>,
    #[serde(rename = "procedure")]
    pub procedure_summary: String,
    #[serde(rename = "procedureSteps")]
    pub procedure_steps: Vec<String>,
}

impl Recipe {
    /// The seed a search result hands over when it is picked.
    pub fn to_seed(&self) -> RecipeSeed {
        RecipeSeed {
            title: self.title.clone(),
            description: self.summary.clone(),
            ingredients: self.ingredients.clone(),
        }
    }

    /// Text of the ingredient or step an info key points at.
    pub fn text_for(&self, key: InfoKey) -> Option<&str> {
        let list = match key.kind {
            InfoKind::Ingredient => &self.ingredients,
            InfoKind::Step => &self.procedure_steps,
        };
        list.get(key.index).map(String::as_str)
    }
}

/// The model sometimes emits ids as strings or floats; only an integer is
/// kept, anything else reads as no id.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

/// Which part of a recipe a follow-up question is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoKind {
    Ingredient,
    Step,
}

impl InfoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoKind::Ingredient => "ingredient",
            InfoKind::Step => "step",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "ingredient" => Some(InfoKind::Ingredient),
            "step" => Some(InfoKind::Step),
            _ => None,
        }
    }
}

/// Key of one additional-info entry on the recipe page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InfoKey {
    pub kind: InfoKind,
    pub index: usize,
}

impl InfoKey {
    pub fn ingredient(index: usize) -> Self {
        Self {
            kind: InfoKind::Ingredient,
            index,
        }
    }

    pub fn step(index: usize) -> Self {
        Self {
            kind: InfoKind::Step,
            index,
        }
    }
}

impl fmt::Display for InfoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.as_str(), self.index)
    }
}

/// Style filters offered next to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchStyle {
    Healthy,
    LowCalories,
    HighProtein,
    Vegetarian,
}

impl SearchStyle {
    pub const ALL: &'static [SearchStyle] = &[
        SearchStyle::Healthy,
        SearchStyle::LowCalories,
        SearchStyle::HighProtein,
        SearchStyle::Vegetarian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStyle::Healthy => "Healthy",
            SearchStyle::LowCalories => "Low Calories",
            SearchStyle::HighProtein => "High Protein",
            SearchStyle::Vegetarian => "Vegetarian",
        }
    }

    /// Case-insensitive; accepts "low-calories" and "low_calories" as well.
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.as_str().eq_ignore_ascii_case(&wanted))
    }
}

impl fmt::Display for SearchStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized search request: keyword plus selected style filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    keyword: String,
    styles: Vec<SearchStyle>,
}

impl SearchQuery {
    /// Trims the keyword and drops repeated styles, keeping first-seen order.
    pub fn new(keyword: &str, styles: &[SearchStyle]) -> Self {
        let mut unique = Vec::with_capacity(styles.len());
        for style in styles {
            if !unique.contains(style) {
                unique.push(*style);
            }
        }
        Self {
            keyword: keyword.trim().to_string(),
            styles: unique,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn styles(&self) -> &[SearchStyle] {
        &self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty()
    }

    /// Comma-joined style labels, empty when no style is selected.
    pub fn styles_label(&self) -> String {
        self.styles
            .iter()
            .map(SearchStyle::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Key under which results for this query are cached.
    ///
    /// Format: `{keyword}` or `{keyword}|{Style1,Style2}`
    pub fn cache_key(&self) -> String {
        if self.styles.is_empty() {
            self.keyword.clone()
        } else {
            format!("{}|{}", self.keyword, self.styles_label())
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(keyword: &str) -> Self {
        Self::new(keyword, &[])
    }
}
