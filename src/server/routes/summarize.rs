//! Document summarization with a single quality retry

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::llm::ChatMessage;
use crate::prompt::PromptBuilder;
use crate::server::state::AppState;

/// A trimmed summary shorter than this triggers one retry with the
/// detailed prompt.
const MIN_SUMMARY_CHARS: usize = 10;

/// Model summary
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Trimmed assistant reply, from whichever attempt ran last
    pub summary: String,
}

/// POST /summarize - Summarize the stored document text
pub async fn summarize(State(state): State<AppState>) -> Result<Json<SummarizeResponse>> {
    // Snapshot the excerpt and release the lock before calling the model.
    let excerpt = {
        let document = state.document();
        if document.is_empty() {
            return Err(Error::validation("No PDF content available - upload first"));
        }
        tracing::info!("Summarizing document ({} text pages)", document.page_count());
        document.summary_excerpt()
    };

    let prompts = [
        PromptBuilder::build_summary_prompt(&excerpt),
        PromptBuilder::build_detailed_summary_prompt(&excerpt),
    ];

    // Two attempts at most: the second runs only when the first reply is
    // too short, and its result stands regardless of length.
    let mut summary = String::new();
    for (attempt, prompt) in prompts.into_iter().enumerate() {
        summary = state.llm().chat(&[ChatMessage::user(prompt)]).await?;
        if summary.chars().count() >= MIN_SUMMARY_CHARS {
            break;
        }
        if attempt == 0 {
            tracing::warn!(
                "Summary shorter than {} characters, retrying with detailed prompt",
                MIN_SUMMARY_CHARS
            );
        }
    }

    Ok(Json(SummarizeResponse { summary }))
}
