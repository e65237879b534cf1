/// Splits raw comma-separated skills into trimmed tokens, in input order.
///
/// Empty tokens are kept, so `"go, sql,"` yields `["go", "sql", ""]`.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|token| token.trim().to_owned()).collect()
}

/// True when the input holds at least one character that is neither a
/// comma nor whitespace.
pub fn has_skill_text(raw: &str) -> bool {
    raw.chars().any(|c| c != ',' && !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::{has_skill_text, split_skills};

    #[test]
    fn trailing_comma_yields_empty_token() {
        assert_eq!(split_skills(" Go ,SQL,"), vec!["Go", "SQL", ""]);
    }

    #[test]
    fn inner_empty_tokens_are_preserved() {
        assert_eq!(split_skills("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_input_is_a_single_empty_token() {
        assert_eq!(split_skills(""), vec![""]);
    }

    #[test]
    fn commas_and_whitespace_carry_no_skill_text() {
        assert!(!has_skill_text(""));
        assert!(!has_skill_text("   "));
        assert!(!has_skill_text(" , ,\t,"));
        assert!(has_skill_text(",rust,"));
    }
}
