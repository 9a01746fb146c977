//! Prompt for suggesting recipes from a keyword.

use super::{JSON_ONLY_RULE, RECIPE_FIELDS};
use crate::types::SearchQuery;

/// Prompt name used in log fields.
pub const SEARCH_PROMPT_NAME: &str = "search_recipes";

/// How many suggestions the model is asked for.
pub const SUGGESTION_COUNT: usize = 4;

pub fn render_search_prompt(query: &SearchQuery) -> String {
    let styles = if query.styles().is_empty() {
        String::new()
    } else {
        format!(
            "\nEvery recipe must also fit these styles: {}.\n",
            query
                .styles()
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    format!(
        r#"The user is looking for recipes and wrote: "{keyword}"
This may be a list of ingredients they have, a dish name, or a craving.
{styles}
Suggest exactly {count} different recipes:
1. The recipe the user most likely expects (a classic match for the request).
2. An easy recipe that needs little time and few steps.
3. A creative recipe that uses the request in an unexpected way.
4. Another creative recipe, different in cuisine or technique from the third.

Respond with a JSON object with a single field "recipes", an array of {count} objects. Each object has these fields:
{fields}

{rule}"#,
        keyword = query.keyword(),
        styles = styles,
        count = SUGGESTION_COUNT,
        fields = RECIPE_FIELDS,
        rule = JSON_ONLY_RULE
    )
}
