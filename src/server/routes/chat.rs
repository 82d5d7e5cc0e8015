//! Question answering over the active document

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::llm::ChatMessage;
use crate::prompt::PromptBuilder;
use crate::server::state::AppState;

/// Minimum characters a trimmed question must have
const MIN_QUERY_CHARS: usize = 3;

/// Incoming question
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Free-text question about the active document
    pub query: String,
}

/// Model answer
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Trimmed assistant reply
    pub answer: String,
}

/// POST /chat - Answer a question against the stored document text
pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let Json(request) = payload.map_err(|_| Error::validation("Invalid request format"))?;
    let query = request.query.trim().to_string();

    tracing::info!("Chat request: {:.50}...", query);

    // Snapshot the excerpt and release the lock before calling the model.
    let excerpt = {
        let document = state.document();
        if document.is_empty() {
            return Err(Error::validation("No PDF content available - upload first"));
        }
        if query.chars().count() < MIN_QUERY_CHARS {
            return Err(Error::validation(
                "Please ask a meaningful question (min 3 characters)",
            ));
        }
        document.question_excerpt()
    };

    let prompt = PromptBuilder::build_question_prompt(&excerpt, &query);
    let answer = state.llm().chat(&[ChatMessage::user(prompt)]).await?;

    Ok(Json(ChatResponse { answer }))
}
