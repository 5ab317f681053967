// Shared prompt fragments and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Closing instruction appended to prompts that expect a bare JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Return ONLY the JSON, no markdown code fences, no extra text. Just pure JSON.";

/// Folds a system prompt into the single user message sent to the model.
pub fn compose_prompt(system: &str, user: &str) -> String {
    format!("{}\n\n{}", system.trim(), user)
}

/// Substitutes `{key}` markers in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user text containing a marker
/// stays literal. Braces that do not form a known marker are kept as is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let marker = values
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match marker {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_known_markers() {
        let filled = fill_template("Hi {name}, see {page}.", &[("name", "Sam"), ("page", "p2")]);
        assert_eq!(filled, "Hi Sam, see p2.");
    }

    #[test]
    fn test_fill_template_keeps_json_braces_and_unknown_markers() {
        let filled = fill_template(r#"{"a": 1} {other} {x"#, &[("x", "y")]);
        assert_eq!(filled, r#"{"a": 1} {other} {x"#);
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template("{a}|{b}", &[("a", "{b}"), ("b", "B")]);
        assert_eq!(filled, "{b}|B");
    }

    #[test]
    fn test_compose_prompt_trims_system_and_separates_with_blank_line() {
        assert_eq!(compose_prompt("  Be brief.\n", "Hello"), "Be brief.\n\nHello");
    }
}
