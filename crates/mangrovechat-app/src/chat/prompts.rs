//! Prompt templates sent to the remote model.
//!
//! Deterministic string interpolation, no state. The wording is part of the
//! product behavior; keep changes deliberate.

/// Build the prompt for the answer call, embedding the verbatim question.
pub fn answer_prompt(question: &str) -> String {
    format!(
        "You are a friendly and knowledgeable chatbot expert about Mangrove forests. \n\
Answer the following question clearly, concisely, and in simple words. Use formatting like bullet points and bold text where appropriate.\n\n\
User Question: {}\n\n\
Provide a helpful and engaging response:",
        question
    )
}

/// Build the prompt for the follow-up suggestion call.
pub fn suggestion_prompt(question: &str) -> String {
    format!(
        "Based on this question about mangrove forests: \"{}\"\n\
Generate 2-3 brief follow-up questions (each under 10 words) that would help deepen understanding.\n\
Format as a simple numbered list like:\n\
1. Question one?\n\
2. Question two?",
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_prompt_embeds_question_verbatim() {
        let prompt = answer_prompt("How do mangroves adapt to salt water?");
        assert!(prompt.contains("User Question: How do mangroves adapt to salt water?"));
        assert!(prompt.contains("expert about Mangrove forests"));
    }

    #[test]
    fn suggestion_prompt_requests_numbered_list() {
        let prompt = suggestion_prompt("What wildlife lives in mangrove forests?");
        assert!(prompt.contains("\"What wildlife lives in mangrove forests?\""));
        assert!(prompt.contains("2-3 brief follow-up questions"));
        assert!(prompt.contains("1. Question one?"));
    }

    #[test]
    fn prompts_are_deterministic() {
        assert_eq!(answer_prompt("q"), answer_prompt("q"));
        assert_eq!(suggestion_prompt("q"), suggestion_prompt("q"));
    }
}
