//! Mangrove Chat Application Library
//!
//! A single-topic question-answering web app about mangrove forests:
//! axum route layer, keyword topic filtering, prompt templates, a Gemini
//! client, and a flat JSON-file chat history.

// Re-export workspace crates
pub use mangrovechat_api::{self as api, GeminiClient, ModelClient, GEMINI_API_URL};
pub use mangrovechat_models::{
    self as models, AskRequest, AskResponse, ClearResponse, ConversationRecord, HistoryResponse,
    StatsResponse,
};

// Local modules
pub mod chat;
pub mod cli;
pub mod config;
pub mod web;

// Re-exports from local modules
pub use chat::export::{export_filename, render_export};
pub use chat::guard::{is_on_topic, REFUSAL_MESSAGE};
pub use chat::history::HistoryStore;
pub use chat::prompts::{answer_prompt, suggestion_prompt};
pub use chat::suggestions::parse_suggestions;
pub use cli::Cli;
pub use config::ClientConfig;
pub use web::server::{WebServer, WebServerConfig};

/// Sample questions shown on the landing page for quick access
pub const SAMPLE_QUESTIONS: &[&str] = &[
    "What are mangrove forests?",
    "What is the structure of a mangrove forest?",
    "How do mangroves adapt to salt water?",
    "How do mangroves help the environment?",
    "How do mangroves protect coastal areas?",
    "What wildlife lives in mangrove forests?",
    "Where are mangrove forests found in the world?",
    "Why are mangroves endangered?",
    "How can we protect and restore mangrove forests?",
];
