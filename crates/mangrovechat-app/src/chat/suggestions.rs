//! Parsing of follow-up suggestions from free-text model output.

/// Maximum number of suggestions returned to the client
const MAX_SUGGESTIONS: usize = 3;

/// Extract numbered-list items from raw model output.
///
/// Keeps lines whose first non-space character is an ASCII digit, strips the
/// leading "<number>." marker, trims whitespace, and returns at most the
/// first three in original order. Everything else is silently dropped; a
/// failed or empty suggestion call yields an empty list, never an error.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .map(|line| match line.split_once('.') {
            Some((_, rest)) => rest.trim().to_string(),
            None => line.to_string(),
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}
