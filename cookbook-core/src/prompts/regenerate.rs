//! Prompt for applying a user-requested change to a whole recipe.

use super::{JSON_ONLY_RULE, RECIPE_FIELDS};
use crate::types::Recipe;

/// Prompt name used in log fields.
pub const REGENERATE_PROMPT_NAME: &str = "regenerate_recipe";

/// Render the change request together with the recipe it applies to.
///
/// The recipe is embedded as JSON in the same shape the answer must have.
pub fn render_regenerate_prompt(original: &Recipe, change_request: &str) -> String {
    let recipe_json = serde_json::to_string_pretty(original).unwrap_or_default();

    format!(
        r#"You are a recipe modification assistant. Here is a recipe as JSON:

{recipe_json}

The user asks for this change: "{change}"

Apply the change and return the COMPLETE modified recipe, not just the changed parts.
If the ingredients change, rewrite the procedure and the steps so they match the new ingredients.
Keep everything the change does not affect.

Respond with a JSON object containing the following fields:
{fields}

{rule}"#,
        recipe_json = recipe_json,
        change = change_request,
        fields = RECIPE_FIELDS,
        rule = JSON_ONLY_RULE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let recipe = Recipe {
            id: None,
            title: "Chili".to_string(),
            summary: "Hearty".to_string(),
            ingredients: vec!["beef".to_string(), "beans".to_string()],
            procedure_summary: "Simmer".to_string(),
            procedure_steps: vec!["Brown beef".to_string()],
        };
        let prompt = render_regenerate_prompt(&recipe, "make it vegetarian");

        assert!(prompt.contains("\"descriptionItems\": \"Hearty\""));
        assert!(prompt.contains(r#"change: "make it vegetarian""#));
        assert!(prompt.contains("COMPLETE modified recipe"));
        assert!(prompt.contains("ONLY JSON"));
    }
}
