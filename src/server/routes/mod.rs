//! API routes for the document Q&A server

pub mod chat;
pub mod summarize;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::post,
    Router,
};

use crate::server::state::AppState;

/// Build the document routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload carries its own body cap; the other routes keep the default
        .route(
            "/upload",
            post(upload::upload_pdf).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Q&A and summarization over the active document
        .route("/chat", post(chat::chat))
        .route("/summarize", post(summarize::summarize))
}
