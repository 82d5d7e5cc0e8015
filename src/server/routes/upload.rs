//! PDF upload endpoint

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::context::DocumentContext;
use crate::error::{Error, Result};
use crate::extract::extract_pdf_text;
use crate::server::state::AppState;

/// Response for a processed upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Number of pages that contributed text
    pub page_count: usize,
}

/// POST /upload - Replace the active document with a freshly extracted PDF
pub async fn upload_pdf(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    // Every attempt starts from a blank slate: a failed upload must leave
    // no stale document behind.
    state.clear_document();

    let mut multipart = multipart.map_err(|_| Error::validation("No file uploaded"))?;

    let mut file = None;
    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let content_type = field.content_type().map(|s| s.to_string());
        let data = field.bytes().await.map_err(read_error)?;
        file = Some((filename, content_type, data));
        break;
    }

    let Some((filename, content_type, data)) = file else {
        return Err(Error::validation("No file uploaded"));
    };

    if filename.is_empty() {
        return Err(Error::validation("No file selected"));
    }

    if !has_pdf_extension(&filename) || content_type.as_deref() != Some("application/pdf") {
        return Err(Error::validation("Only PDF files are allowed"));
    }

    tracing::info!("Processing file: {} ({} bytes)", filename, data.len());

    let extracted = extract_pdf_text(&data)?;
    let page_count = extracted.page_count;
    state.install_document(DocumentContext::new(extracted.text, page_count));

    tracing::info!("Processed PDF with {} text pages", page_count);

    Ok(Json(UploadResponse {
        message: format!("PDF processed successfully ({page_count} pages with text)"),
        page_count,
    }))
}

/// The filename counts as PDF when the text after the last dot says so.
fn has_pdf_extension(filename: &str) -> bool {
    filename.contains('.')
        && filename
            .rsplit('.')
            .next()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn read_error(err: MultipartError) -> Error {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::TooLarge
    } else {
        Error::Extraction(format!("Failed to read upload: {err}"))
    }
}
