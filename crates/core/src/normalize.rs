/// Collapses every run of whitespace (newlines included) to a single space
/// and trims the ends. Total and idempotent; all downstream stages consume
/// this form.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        let input = "Invoice  \t #A123\n\nCompany:   Acme";
        assert_eq!(normalize_whitespace(input), "Invoice #A123 Company: Acme");
    }

    #[test]
    fn leading_and_trailing_whitespace_is_trimmed() {
        assert_eq!(normalize_whitespace("  padded  "), "padded");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_whitespace("a\u{a0}b\n c\t\td");
        assert_eq!(normalize_whitespace(&once), once);
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize_whitespace(" \n\t "), "");
        assert_eq!(normalize_whitespace(""), "");
    }
}
