//! Error types for the document Q&A service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Document Q&A service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed request input
    #[error("{0}")]
    Validation(String),

    /// The uploaded document itself is unusable (corrupted, encrypted,
    /// empty, or without extractable text)
    #[error("{0}")]
    Document(String),

    /// Upload body exceeded the size limit
    #[error("Uploaded file is too large")]
    TooLarge,

    /// PDF processing failed outside the anticipated cases
    #[error("PDF processing failed: {0}")]
    Extraction(String),

    /// Ollama/LLM error
    #[error("Processing error: {0}")]
    Model(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a document content error
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document(message.into())
    }

    /// Create a model error
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation(_) | Error::Document(_) => StatusCode::BAD_REQUEST,
            Error::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Extraction(_) | Error::Model(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!("{message}");
        } else {
            tracing::warn!("{message}");
        }

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let response = Error::validation("No file uploaded").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = Error::document("The PDF file is empty").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_oversized_upload_maps_to_413() {
        let response = Error::TooLarge.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_system_errors_map_to_500() {
        let response = Error::Extraction("truncated xref table".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = Error::model("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_is_flat_json() {
        let response = Error::validation("Invalid request format").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Invalid request format" }));
    }

    #[test]
    fn test_model_error_message_prefix() {
        let err = Error::model("Chat request failed: connection refused");
        assert_eq!(
            err.to_string(),
            "Processing error: Chat request failed: connection refused"
        );
    }
}
