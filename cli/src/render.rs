//! Plain-text rendering of recipes and answers.

use cookbook_core::{InfoThread, Recipe};
use std::fmt::Write;

/// One line per search suggestion, numbered from 1.
pub fn render_suggestions(recipes: &[Recipe]) -> String {
    let mut out = String::new();
    for (n, recipe) in recipes.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", n + 1, recipe.title);
        if !recipe.summary.is_empty() {
            let _ = writeln!(out, "    {}", recipe.summary);
        }
        if !recipe.ingredients.is_empty() {
            let _ = writeln!(out, "    ({})", recipe.ingredients.join(", "));
        }
    }
    out
}

/// Full recipe with numbered ingredients and steps.
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.title);
    let _ = writeln!(out, "{}", "=".repeat(recipe.title.chars().count()));
    let _ = writeln!(out, "{}\n", recipe.summary);

    let _ = writeln!(out, "Ingredients:");
    for (n, item) in recipe.ingredients.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", n + 1, item);
    }

    let _ = writeln!(out, "\nProcedure:\n  {}\n", recipe.procedure_summary);

    let _ = writeln!(out, "Steps:");
    for (n, step) in recipe.procedure_steps.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", n + 1, step);
    }
    out
}

/// An answer thread, follow-ups indented one level deeper each.
pub fn render_thread(thread: &InfoThread) -> String {
    let mut out = String::new();
    for (depth, answer) in thread.answers().iter().enumerate() {
        let _ = writeln!(out, "{}> {}", "  ".repeat(depth + 1), answer);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: None,
            title: "Toast".to_string(),
            summary: "Crunchy".to_string(),
            ingredients: vec!["bread".to_string(), "butter".to_string()],
            procedure_summary: "Toast and spread".to_string(),
            procedure_steps: vec!["Toast bread".to_string(), "Spread butter".to_string()],
        }
    }

    #[test]
    fn test_render_recipe() {
        let text = render_recipe(&recipe());
        assert!(text.starts_with("Toast\n=====\nCrunchy\n"));
        assert!(text.contains("   2. butter"));
        assert!(text.contains("Procedure:\n  Toast and spread"));
        assert!(text.contains("   1. Toast bread"));
    }

    #[test]
    fn test_render_suggestions() {
        let text = render_suggestions(&[recipe()]);
        assert_eq!(text, " 1. Toast\n    Crunchy\n    (bread, butter)\n");
    }
}
