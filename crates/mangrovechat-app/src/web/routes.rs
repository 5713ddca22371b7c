use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::chat::{
    answer_prompt, export_filename, is_on_topic, parse_suggestions, render_export,
    suggestion_prompt, HistoryStore, REFUSAL_MESSAGE,
};
use crate::SAMPLE_QUESTIONS;
use mangrovechat_api::ModelClient;
use mangrovechat_models::{
    AskRequest, AskResponse, ClearResponse, HistoryResponse, StatsResponse,
};

/// Fixed message returned for empty or whitespace-only questions
pub const EMPTY_QUESTION_MESSAGE: &str = "❌ Please enter a question.";

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<HistoryStore>,
    pub model: Arc<dyn ModelClient>,
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/ask", post(ask))
        .route("/history", get(get_history))
        .route("/clear-history", post(clear_history))
        .route("/export", get(export_chat))
        .route("/stats", get(get_stats))
        .with_state(state)
}

/// GET / - Serve the page shell with the fixed sample questions injected
async fn serve_index() -> Html<String> {
    let sample_questions =
        serde_json::to_string(SAMPLE_QUESTIONS).unwrap_or_else(|_| "[]".to_string());
    Html(include_str!("../../web/index.html").replace("__SAMPLE_QUESTIONS__", &sample_questions))
}

/// POST /ask - Answer a question about mangrove forests
///
/// Remote-call failures on the answer path are embedded in the answer text
/// of a success-shaped response; clients only ever see `{answer,
/// suggestions}`. Only storage faults surface as server errors.
async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = payload.question.trim().to_string();

    if question.is_empty() {
        return Ok(Json(AskResponse {
            answer: EMPTY_QUESTION_MESSAGE.to_string(),
            suggestions: Vec::new(),
        }));
    }

    // Restrict topic: only mangrove-related questions reach the model
    if !is_on_topic(&question) {
        return Ok(Json(AskResponse {
            answer: REFUSAL_MESSAGE.to_string(),
            suggestions: Vec::new(),
        }));
    }

    match state.model.generate(&answer_prompt(&question)).await {
        Ok(reply) => {
            let reply = reply.trim().to_string();

            state.history.append(&question, &reply)?;

            let suggestions = generate_suggestions(&state, &question).await;

            Ok(Json(AskResponse {
                answer: reply,
                suggestions,
            }))
        }
        Err(e) => Ok(Json(AskResponse {
            answer: format!("❌ Error generating response: {}", e),
            suggestions: Vec::new(),
        })),
    }
}

/// Generate follow-up suggestions; best-effort, failures yield an empty list
async fn generate_suggestions(state: &AppState, question: &str) -> Vec<String> {
    match state.model.generate(&suggestion_prompt(question)).await {
        Ok(text) => parse_suggestions(&text),
        Err(_) => Vec::new(),
    }
}

/// GET /history - Full chat history
async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let conversations = state.history.load()?;
    Ok(Json(HistoryResponse { conversations }))
}

/// POST /clear-history - Discard all records
async fn clear_history(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, AppError> {
    state.history.clear()?;
    Ok(Json(ClearResponse {
        success: true,
        message: "Chat history cleared".to_string(),
    }))
}

/// GET /export - Chat history as a downloadable text file
async fn export_chat(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let records = state.history.load()?;
    let now = chrono::Local::now();
    let content = render_export(&records, now);

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/plain; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export_filename(now)),
        ),
    ];

    Ok((headers, content).into_response())
}

/// GET /stats - Record counts over the history
async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let total = state.history.count()?;
    Ok(Json(StatsResponse {
        total_questions: total,
        total_conversations: total,
    }))
}

/// Error handling: storage and other internal faults map to a generic
/// JSON-shaped 500 response.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(serde_json::json!({
            "error": self.0.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
