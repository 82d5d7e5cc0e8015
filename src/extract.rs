//! In-memory PDF text extraction

use lopdf::Document;

use crate::error::{Error, Result};

/// Text pulled out of an uploaded PDF.
#[derive(Debug)]
pub struct ExtractedText {
    /// Per-page text, each page prefixed with `Page {n}:`, joined by newlines.
    pub text: String,
    /// Number of pages that contributed text.
    pub page_count: usize,
}

/// Extract labeled per-page text from raw PDF bytes.
///
/// Pages are processed independently: a page whose extraction fails is
/// logged and skipped, and pages with no text after cleanup are absorbed
/// without counting. Page labels keep the document's real page numbers.
pub fn extract_pdf_text(data: &[u8]) -> Result<ExtractedText> {
    let doc = Document::load_mem(data).map_err(|e| {
        tracing::warn!("PDF load failed: {e}");
        Error::document("Corrupted or encrypted PDF file")
    })?;

    if doc.is_encrypted() {
        return Err(Error::document("Corrupted or encrypted PDF file"));
    }

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(Error::document("The PDF file is empty"));
    }

    let mut sections = Vec::new();
    for (page_num, _object_id) in pages {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => {
                let cleaned = page_text.replace('\0', "");
                let cleaned = cleaned.trim();
                if !cleaned.is_empty() {
                    sections.push(format!("Page {page_num}:\n{cleaned}"));
                }
            }
            Err(e) => {
                tracing::warn!("Error extracting page {page_num}: {e}");
            }
        }
    }

    if sections.is_empty() {
        return Err(Error::document("No text could be extracted (scanned PDF?)"));
    }

    Ok(ExtractedText {
        page_count: sections.len(),
        text: sections.join("\n"),
    })
}
