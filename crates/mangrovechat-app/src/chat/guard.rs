//! Keyword-based topic admissibility filter.

/// Keywords that mark a question as in-domain
const TOPIC_KEYWORDS: &[&str] = &["mangrove", "forest", "environment"];

/// Fixed refusal returned for off-topic questions
pub const REFUSAL_MESSAGE: &str = "🌿 I can only answer questions related to Mangrove forests and the environment. Please ask about mangroves!";

/// True when the lowercased question contains at least one topic keyword.
/// Case-insensitive substring match, no side effects.
pub fn is_on_topic(question: &str) -> bool {
    let lowered = question.to_lowercase();
    TOPIC_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_questions_mentioning_mangroves() {
        assert!(is_on_topic("What are mangrove forests?"));
        assert!(is_on_topic("Why are MANGROVES endangered?"));
    }

    #[test]
    fn accepts_any_single_keyword() {
        assert!(is_on_topic("Tell me about the forest canopy"));
        assert!(is_on_topic("How does this help the environment?"));
    }

    #[test]
    fn rejects_unrelated_questions() {
        assert!(!is_on_topic("What is the capital of France?"));
        assert!(!is_on_topic("Write me a poem about the ocean"));
        assert!(!is_on_topic(""));
    }

    #[test]
    fn keyword_match_is_substring_based() {
        // "deforestation" contains "forest", so it passes the filter
        assert!(is_on_topic("What causes deforestation?"));
    }
}
