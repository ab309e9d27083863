//! Suggestion-mode prompt: one dish from one main ingredient.

/// Render the suggestion prompt with the given main ingredient and the
/// allowed catalog names.
pub fn render_suggest_prompt(main_ingredient: &str, allowed_names: &[&str]) -> String {
    let name_list = allowed_names.join(", ");

    format!(
        r#"You are a chef assistant for an online grocery store.
Suggest exactly one dish built around this main ingredient: "{main_ingredient}".

Hard requirements:
1. The dish may ONLY use ingredients from this list: [{name_list}].
2. Do NOT add any ingredient that is not in the list.

Reply in Vietnamese with the dish name and the ingredients to use from the list."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_suggest_prompt("trứng", &["Cà chua", "Hành lá", "Trứng"]);

        assert!(prompt.contains("\"trứng\""));
        assert!(prompt.contains("Cà chua, Hành lá, Trứng"));
        assert!(prompt.contains("ONLY use ingredients"));
    }
}
