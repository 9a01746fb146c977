//! Prompt for expanding a recipe seed into a full recipe.

use super::{JSON_ONLY_RULE, RECIPE_FIELDS};
use crate::types::RecipeSeed;

/// Prompt name used in log fields.
pub const GENERATE_PROMPT_NAME: &str = "generate_recipe";

pub fn render_generate_prompt(seed: &RecipeSeed) -> String {
    format!(
        r#"Generate a detailed recipe based on the following information:
- Title: {title}
- Description: {description}
- Ingredients: {ingredients}

Respond with a JSON object containing the following fields:
{fields}

{rule}"#,
        title = seed.title,
        description = seed.description,
        ingredients = seed.ingredients.join(", "),
        fields = RECIPE_FIELDS,
        rule = JSON_ONLY_RULE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let seed = RecipeSeed {
            title: "Omelette".to_string(),
            description: String::new(),
            ingredients: vec!["egg".to_string(), "butter".to_string()],
        };
        let prompt = render_generate_prompt(&seed);

        assert!(prompt.contains("- Title: Omelette"));
        assert!(prompt.contains("- Ingredients: egg, butter"));
        assert!(prompt.contains("\"procedureSteps\""));
        assert!(prompt.contains("ONLY JSON"));
    }
}
