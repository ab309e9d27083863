//! Schema validation for lookup-mode provider output.
//!
//! Fail-closed: a purchase-affecting recipe is either fully valid or the
//! request dies here. No partially populated recipe ever leaves this module.

use serde_json::Value;

use crate::error::RecipeError;
use crate::types::ParsedRecipe;

/// Validate a parsed provider object against the recipe schema.
///
/// Requires `name` to be a non-empty string, `instructions` a string, and
/// `ingredients_needed` an array of strings. An empty array is valid.
pub fn validate_recipe(value: &Value) -> Result<ParsedRecipe, RecipeError> {
    let name = require_string(value, "name")?;
    if name.is_empty() {
        return Err(RecipeError::SchemaViolation(
            "`name` must be a non-empty string".to_string(),
        ));
    }

    let instructions = require_string(value, "instructions")?;

    let entries = value
        .get("ingredients_needed")
        .ok_or_else(|| missing("ingredients_needed"))?
        .as_array()
        .ok_or_else(|| mistyped("ingredients_needed", "an array of strings"))?;

    let mut ingredients_needed = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry
            .as_str()
            .ok_or_else(|| mistyped("ingredients_needed", "an array of strings"))?;
        ingredients_needed.push(name.to_string());
    }

    Ok(ParsedRecipe {
        name: name.to_string(),
        instructions: instructions.to_string(),
        ingredients_needed,
    })
}

fn require_string<'a>(value: &'a Value, field: &str) -> Result<&'a str, RecipeError> {
    match value.get(field) {
        None => Err(missing(field)),
        Some(v) => v.as_str().ok_or_else(|| mistyped(field, "a string")),
    }
}

fn missing(field: &str) -> RecipeError {
    RecipeError::SchemaViolation(format!("missing required field `{field}`"))
}

fn mistyped(field: &str, expected: &str) -> RecipeError {
    RecipeError::SchemaViolation(format!("`{field}` must be {expected}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_recipe() {
        let value = json!({
            "name": "Trứng chiên cà chua",
            "instructions": "1. Đập trứng...\n2. Xào cà chua...",
            "ingredients_needed": ["Trứng", "Cà chua"]
        });

        let recipe = validate_recipe(&value).unwrap();
        assert_eq!(recipe.name, "Trứng chiên cà chua");
        assert_eq!(recipe.ingredients_needed, vec!["Trứng", "Cà chua"]);
    }

    #[test]
    fn test_empty_ingredients_is_valid() {
        let value = json!({
            "name": "X",
            "instructions": "Y",
            "ingredients_needed": []
        });

        let recipe = validate_recipe(&value).unwrap();
        assert!(recipe.ingredients_needed.is_empty());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let value = json!({ "name": "X" });

        let result = validate_recipe(&value);
        assert!(matches!(result, Err(RecipeError::SchemaViolation(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let value = json!({
            "name": "",
            "instructions": "Y",
            "ingredients_needed": []
        });

        assert!(matches!(
            validate_recipe(&value),
            Err(RecipeError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_mistyped_ingredients_rejected() {
        let value = json!({
            "name": "X",
            "instructions": "Y",
            "ingredients_needed": [{"name": "Trứng"}]
        });

        assert!(matches!(
            validate_recipe(&value),
            Err(RecipeError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_mistyped_instructions_rejected() {
        let value = json!({
            "name": "X",
            "instructions": ["step one"],
            "ingredients_needed": []
        });

        assert!(matches!(
            validate_recipe(&value),
            Err(RecipeError::SchemaViolation(_))
        ));
    }
}
