//! Prompts for short free-form answers about a recipe.

use super::render_recipe_context;
use crate::types::Recipe;

/// Prompt name used in log fields.
pub const ASK_PROMPT_NAME: &str = "ask_about";

/// Prompt name used in log fields.
pub const FOLLOW_UP_PROMPT_NAME: &str = "follow_up";

/// Ask about one ingredient or step of a recipe.
pub fn render_ask_prompt(text: &str, recipe: &Recipe) -> String {
    format!(
        r#"You are a helpful cooking assistant. Here is the recipe the user is cooking:

{context}

The user wants to know more about this part of the recipe: "{text}"

Explain it in at most two short sentences (why it is used, a substitute, or a tip). Answer in plain text, not JSON."#,
        context = render_recipe_context(recipe),
        text = text
    )
}

/// Ask a follow-up question on top of a previous answer.
pub fn render_follow_up_prompt(question: &str, recipe: &Recipe, prior_answer: &str) -> String {
    format!(
        r#"You are a helpful cooking assistant. Here is the recipe the user is cooking:

{context}

Earlier you told the user: "{prior}"

Their follow-up question is: "{question}"

Answer in at most two short sentences. Answer in plain text, not JSON."#,
        context = render_recipe_context(recipe),
        prior = prior_answer,
        question = question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: Some(1),
            title: "Carbonara".to_string(),
            summary: "Roman pasta".to_string(),
            ingredients: vec!["guanciale".to_string(), "pecorino".to_string()],
            procedure_summary: "Toss pasta with egg and cheese".to_string(),
            procedure_steps: vec!["Crisp the guanciale".to_string()],
        }
    }

    #[test]
    fn test_render_ask_prompt() {
        let prompt = render_ask_prompt("guanciale", &recipe());
        assert!(prompt.contains("Title: Carbonara"));
        assert!(prompt.contains(r#"this part of the recipe: "guanciale""#));
        assert!(prompt.contains("two short sentences"));
    }

    #[test]
    fn test_render_follow_up_prompt() {
        let prompt =
            render_follow_up_prompt("Can I use bacon?", &recipe(), "Guanciale is cured pork cheek.");
        assert!(prompt.contains("Earlier you told the user: \"Guanciale is cured pork cheek.\""));
        assert!(prompt.contains("\"Can I use bacon?\""));
        assert!(prompt.contains("1. Crisp the guanciale"));
    }
}
