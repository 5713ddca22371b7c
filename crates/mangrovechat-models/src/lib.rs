//! Shared types for mangrovechat
//!
//! Wire-level request/response bodies and the persisted history record.

use serde::{Deserialize, Serialize};

/// One stored question/answer pair with its creation timestamp.
///
/// Records are append-only: created when a question is answered, never
/// mutated, removed only by a full history clear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationRecord {
    /// RFC 3339 local timestamp captured at append time
    pub timestamp: String,
    pub question: String,
    pub answer: String,
}

/// Body of `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

/// Response of `POST /ask`
///
/// Remote-call failures on the answer path are embedded in `answer` rather
/// than returned as an error status; the response shape never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Response of `GET /history`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub conversations: Vec<ConversationRecord>,
}

/// Response of `POST /clear-history`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
}

/// Response of `GET /stats`
///
/// Both counts equal the history record count; the distinction is kept for
/// client compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_questions: usize,
    pub total_conversations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_record_round_trips_through_json() {
        let record = ConversationRecord {
            timestamp: "2024-06-01T12:00:00+00:00".to_string(),
            question: "What are mangrove forests?".to_string(),
            answer: "Coastal wetland forests.".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ConversationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn ask_request_defaults_missing_question_to_empty() {
        let req: AskRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.question, "");
    }

    #[test]
    fn ask_response_defaults_missing_suggestions_to_empty() {
        let resp: AskResponse = serde_json::from_str(r#"{"answer": "hi"}"#).unwrap();
        assert_eq!(resp.answer, "hi");
        assert!(resp.suggestions.is_empty());
    }
}
