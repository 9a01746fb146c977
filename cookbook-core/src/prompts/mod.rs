//! Prompt templates for each gateway operation.
//!
//! Every template that expects structured output ends with
//! [`JSON_ONLY_RULE`]; the gateway does not dig JSON out of surrounding prose.

pub mod ask;
pub mod generate;
pub mod regenerate;
pub mod search;

pub use ask::{render_ask_prompt, render_follow_up_prompt};
pub use generate::render_generate_prompt;
pub use regenerate::render_regenerate_prompt;
pub use search::render_search_prompt;

use crate::types::Recipe;

/// Field list shared by every prompt that asks for a full recipe.
pub const RECIPE_FIELDS: &str = r#"- "title": a string (the recipe title)
- "descriptionItems": a string (a brief description of the recipe)
- "items": an array of strings (the list of ingredients with quantities)
- "procedure": a string (a summary of the cooking procedure)
- "procedureSteps": an array of strings (step-by-step instructions for the recipe)"#;

/// Closing instruction for prompts whose answer is parsed as JSON.
pub const JSON_ONLY_RULE: &str = "Remember: THERE SHOULD NOT BE ANYTHING ELSE THAN THE JSON. ONLY JSON. The text must start with { and end with } so it can be parsed directly.";

/// Render a recipe as plain text context for question prompts.
pub(crate) fn render_recipe_context(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|i| format!("- {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let steps = recipe
        .procedure_steps
        .iter()
        .enumerate()
        .map(|(n, s)| format!("{}. {}", n + 1, s))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Title: {title}\nDescription: {summary}\nIngredients:\n{ingredients}\nProcedure: {procedure}\nSteps:\n{steps}",
        title = recipe.title,
        summary = recipe.summary,
        ingredients = ingredients,
        procedure = recipe.procedure_summary,
        steps = steps
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_context() {
        let recipe = Recipe {
            id: None,
            title: "Pancakes".to_string(),
            summary: "Fluffy".to_string(),
            ingredients: vec!["flour".to_string(), "milk".to_string()],
            procedure_summary: "Mix and fry".to_string(),
            procedure_steps: vec!["Mix".to_string(), "Fry".to_string()],
        };
        let context = render_recipe_context(&recipe);
        assert!(context.contains("Title: Pancakes"));
        assert!(context.contains("- milk"));
        assert!(context.contains("2. Fry"));
    }
}
