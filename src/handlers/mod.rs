// Two-tier handler architecture:
// Public (no auth) -> Protected (session token required)

pub mod protected;
pub mod public;

use std::collections::HashMap;

/// Pull a required text field out of a submitted payload, recording a field
/// error when it is missing or blank.
pub(crate) fn require_text(
    value: &Option<String>,
    field: &'static str,
    errors: &mut HashMap<String, String>,
) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            errors.insert(field.to_string(), "This field is required".to_string());
            String::new()
        }
    }
}

/// Normalize an optional text field: trimmed, with blank values collapsed
/// to None.
pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_flags_missing_and_blank() {
        let mut errors = HashMap::new();
        require_text(&None, "title", &mut errors);
        require_text(&Some("   ".to_string()), "content", &mut errors);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("content"));
    }

    #[test]
    fn require_text_trims_present_values() {
        let mut errors = HashMap::new();
        let value = require_text(&Some("  hello  ".to_string()), "title", &mut errors);
        assert_eq!(value, "hello");
        assert!(errors.is_empty());
    }

    #[test]
    fn optional_text_collapses_blank_to_none() {
        assert_eq!(optional_text(&Some("  ".to_string())), None);
        assert_eq!(optional_text(&None), None);
        assert_eq!(optional_text(&Some(" x ".to_string())), Some("x".to_string()));
    }
}
