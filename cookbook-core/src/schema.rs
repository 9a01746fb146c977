//! Validation of completion text against the expected record shapes.
//!
//! All checks are all-or-nothing: a response either converts completely or
//! is rejected with a [`ValidationError`].

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::Recipe;

/// Parse text that must be exactly one JSON object.
///
/// Surrounding whitespace is fine; surrounding prose is not.
fn parse_object(text: &str) -> Result<serde_json::Map<String, Value>, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ValidationError::NotAnObject),
    }
}

fn recipe_from_value(value: Value) -> Result<Recipe, String> {
    if !value.is_object() {
        return Err("expected a JSON object".to_string());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Validate a single recipe response.
pub fn parse_recipe(text: &str) -> Result<Recipe, ValidationError> {
    let map = parse_object(text)?;
    recipe_from_value(Value::Object(map)).map_err(ValidationError::Schema)
}

/// Validate a `{"recipes": [...]}` response.
///
/// One malformed element rejects the whole batch. An empty array is a valid
/// "nothing found".
pub fn parse_recipe_batch(text: &str) -> Result<Vec<Recipe>, ValidationError> {
    let mut map = parse_object(text)?;

    let elements = match map.remove("recipes") {
        Some(Value::Array(elements)) => elements,
        _ => return Err(ValidationError::MissingRecipes),
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            recipe_from_value(value)
                .map_err(|message| ValidationError::BatchElement { index, message })
        })
        .collect()
}

/// Validate a free-form prose answer: anything non-blank, returned untouched.
pub fn parse_prose(text: &str) -> Result<String, ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::EmptyResponse)
    } else {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OMELETTE: &str = r#"{"title":"Omelette","descriptionItems":"A quick breakfast","items":["egg","butter"],"procedure":"Whisk and fry","procedureSteps":["Whisk eggs","Melt butter","Cook 3 min"]}"#;

    #[test]
    fn test_parse_recipe() {
        let recipe = parse_recipe(OMELETTE).unwrap();
        assert_eq!(recipe.id, None);
        assert_eq!(recipe.title, "Omelette");
        assert_eq!(recipe.summary, "A quick breakfast");
        assert_eq!(recipe.ingredients, vec!["egg", "butter"]);
        assert_eq!(recipe.procedure_summary, "Whisk and fry");
        assert_eq!(
            recipe.procedure_steps,
            vec!["Whisk eggs", "Melt butter", "Cook 3 min"]
        );
    }

    #[test]
    fn test_parse_recipe_with_id_and_extra_fields() {
        let text = r#"{"id":7,"title":"T","descriptionItems":"D","items":[],"procedure":"P","procedureSteps":[],"servings":2}"#;
        let recipe = parse_recipe(text).unwrap();
        assert_eq!(recipe.id, Some(7));
    }

    #[test]
    fn test_surrounding_whitespace_is_allowed() {
        assert!(parse_recipe(&format!("\n  {}\n", OMELETTE)).is_ok());
    }

    #[test]
    fn test_surrounding_prose_is_rejected() {
        let text = format!("Here is your recipe:\n{}", OMELETTE);
        assert!(matches!(
            parse_recipe(&text),
            Err(ValidationError::MalformedJson(_))
        ));

        let text = format!("{} Enjoy!", OMELETTE);
        assert!(matches!(
            parse_recipe(&text),
            Err(ValidationError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_blank_text_is_empty_response() {
        assert_eq!(parse_recipe(""), Err(ValidationError::EmptyResponse));
        assert_eq!(parse_recipe_batch(" \n"), Err(ValidationError::EmptyResponse));
    }

    #[test]
    fn test_array_is_not_an_object() {
        let text = r#"["Omelette","A quick breakfast",["egg"],"Whisk",["Whisk"]]"#;
        assert_eq!(parse_recipe(text), Err(ValidationError::NotAnObject));
    }

    #[test]
    fn test_missing_field() {
        let text = r#"{"title":"Omelette","descriptionItems":"A quick breakfast","items":["egg"],"procedure":"Whisk and fry"}"#;
        match parse_recipe(text) {
            Err(ValidationError::Schema(message)) => assert!(message.contains("procedureSteps")),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_null_field() {
        let text = r#"{"title":null,"descriptionItems":"D","items":[],"procedure":"P","procedureSteps":[]}"#;
        assert!(matches!(parse_recipe(text), Err(ValidationError::Schema(_))));
    }

    #[test]
    fn test_wrong_element_type() {
        let text = r#"{"title":"T","descriptionItems":"D","items":["egg",2],"procedure":"P","procedureSteps":[]}"#;
        assert!(matches!(parse_recipe(text), Err(ValidationError::Schema(_))));

        let text = r#"{"title":"T","descriptionItems":"D","items":"egg, butter","procedure":"P","procedureSteps":[]}"#;
        assert!(matches!(parse_recipe(text), Err(ValidationError::Schema(_))));
    }

    #[test]
    fn test_parse_batch() {
        let text = format!(r#"{{"recipes":[{},{}]}}"#, OMELETTE, OMELETTE);
        assert_eq!(parse_recipe_batch(&text).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_batch_ignores_malformed_ids() {
        let text = r#"{"recipes":[{"id":"1","title":"A","descriptionItems":"D","items":[],"procedure":"P","procedureSteps":[]},{"id":2.5,"title":"B","descriptionItems":"D","items":[],"procedure":"P","procedureSteps":[]}]}"#;
        let recipes = parse_recipe_batch(text).unwrap();
        assert_eq!(recipes.len(), 2);
        assert!(recipes.iter().all(|r| r.id.is_none()));
    }

    #[test]
    fn test_parse_batch_empty() {
        assert!(parse_recipe_batch(r#"{"recipes":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_batch_rejects_all_on_one_bad_element() {
        let bad = r#"{"title":"Broken","items":["egg"]}"#;
        let text = format!(
            r#"{{"recipes":[{ok},{ok},{ok},{bad}]}}"#,
            ok = OMELETTE,
            bad = bad
        );
        match parse_recipe_batch(&text) {
            Err(ValidationError::BatchElement { index, .. }) => assert_eq!(index, 3),
            other => panic!("expected batch element error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_batch_non_object_element() {
        let text = format!(r#"{{"recipes":[{},"Omelette"]}}"#, OMELETTE);
        assert!(matches!(
            parse_recipe_batch(&text),
            Err(ValidationError::BatchElement { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_batch_missing_recipes() {
        assert_eq!(
            parse_recipe_batch(r#"{"results":[]}"#),
            Err(ValidationError::MissingRecipes)
        );
        assert_eq!(
            parse_recipe_batch(r#"{"recipes":{}}"#),
            Err(ValidationError::MissingRecipes)
        );
    }

    #[test]
    fn test_parse_prose() {
        let text = "Eggs add richness and bind the mixture.";
        assert_eq!(parse_prose(text).unwrap(), text);
        assert_eq!(parse_prose("  \n"), Err(ValidationError::EmptyResponse));
    }
}
