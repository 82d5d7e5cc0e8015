//! The single in-memory document the service answers questions from.
//!
//! Exactly one document is active at a time. A successful upload replaces it
//! wholesale; a failed upload leaves it empty. Nothing here survives a
//! process restart.

/// Maximum characters of stored text excerpted into any model prompt.
pub const CHUNK_SIZE: usize = 3_500;

/// Leading lines of stored text offered as question-answering context.
pub const QUERY_CONTEXT_LINES: usize = 10;

/// Extracted text of the active document, with page labels baked in.
#[derive(Debug, Clone, Default)]
pub struct DocumentContext {
    text: String,
    page_count: usize,
}

impl DocumentContext {
    /// Create a context from extracted text and its contributing page count.
    pub fn new(text: String, page_count: usize) -> Self {
        Self { text, page_count }
    }

    /// True until the first successful upload, and after a failed one.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Full stored text, one `Page {n}:` labeled block per page.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of pages that contributed text.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Drop the stored document.
    pub fn clear(&mut self) {
        self.text.clear();
        self.page_count = 0;
    }

    /// Context excerpt for question answering: the first
    /// [`QUERY_CONTEXT_LINES`] lines, capped at [`CHUNK_SIZE`] characters.
    pub fn question_excerpt(&self) -> String {
        let head = self
            .text
            .lines()
            .take(QUERY_CONTEXT_LINES)
            .collect::<Vec<_>>()
            .join("\n");
        truncate_chars(&head, CHUNK_SIZE)
    }

    /// Context excerpt for summarization: the first [`CHUNK_SIZE`] characters.
    pub fn summary_excerpt(&self) -> String {
        truncate_chars(&self.text, CHUNK_SIZE)
    }
}

/// Truncate to at most `max` characters without splitting a code point.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((boundary, _)) => text[..boundary].to_string(),
        None => text.to_string(),
    }
}
