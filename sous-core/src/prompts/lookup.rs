//! Lookup-mode prompt: a structured recipe for a named dish.

/// Render the lookup prompt with the given dish name and the allowed
/// ingredient names.
///
/// The reply is demanded as a single JSON object; ingredients missing from
/// the list must be omitted, never substituted.
pub fn render_lookup_prompt(dish_name: &str, allowed_names: &[&str]) -> String {
    let name_list = allowed_names.join(", ");

    format!(
        r#"You are a professional chef. Provide a detailed recipe for the dish: "{dish_name}".

Hard requirements:
1. You may ONLY use ingredients from this list: [{name_list}].
2. Do NOT invent any ingredient that is not in the list. If the traditional
recipe needs something that is missing (for example coconut water), leave it
out and cook with what is available.

Reply with EXACTLY one JSON object and no other text. The structure must be:
{{
  "name": "Dish name (normalized)",
  "instructions": "Numbered cooking steps (use \n for line breaks)",
  "ingredients_needed": [
    "Ingredient name 1 (EXACTLY as written in the list)",
    "Ingredient name 2 (EXACTLY as written in the list)"
  ]
}}

Write the name and the instructions in Vietnamese."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_lookup_prompt("Trứng chiên cà chua", &["Cà chua", "Trứng"]);

        assert!(prompt.contains("\"Trứng chiên cà chua\""));
        assert!(prompt.contains("Cà chua, Trứng"));
        assert!(prompt.contains("ingredients_needed"));
        assert!(prompt.contains("EXACTLY one JSON object"));
    }
}
