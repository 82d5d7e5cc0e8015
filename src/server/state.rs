//! Application state for the document Q&A server

use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::context::DocumentContext;
use crate::llm::OllamaClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// Ollama chat client
    llm: OllamaClient,
    /// The single active document, empty until a successful upload
    document: RwLock<DocumentContext>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Self {
        let llm = OllamaClient::new(&config.llm);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                llm,
                document: RwLock::new(DocumentContext::default()),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the Ollama client
    pub fn llm(&self) -> &OllamaClient {
        &self.inner.llm
    }

    /// Read access to the active document. Handlers must drop the guard
    /// before awaiting anything.
    pub fn document(&self) -> RwLockReadGuard<'_, DocumentContext> {
        self.inner.document.read()
    }

    /// Drop the active document
    pub fn clear_document(&self) {
        self.inner.document.write().clear();
    }

    /// Replace the active document
    pub fn install_document(&self, document: DocumentContext) {
        *self.inner.document.write() = document;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lifecycle() {
        let state = AppState::new(AppConfig::default());
        assert!(state.document().is_empty());

        state.install_document(DocumentContext::new("Page 1:\nHello".to_string(), 1));
        assert!(!state.document().is_empty());
        assert_eq!(state.document().page_count(), 1);

        state.clear_document();
        assert!(state.document().is_empty());
        assert_eq!(state.document().page_count(), 0);
    }

    #[test]
    fn test_clones_share_the_same_document() {
        let state = AppState::new(AppConfig::default());
        let other = state.clone();

        state.install_document(DocumentContext::new("Page 1:\nShared".to_string(), 1));
        assert_eq!(other.document().text(), "Page 1:\nShared");
    }

    #[test]
    fn test_state_exposes_config_and_client() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.config().server.max_upload_size, 16 * 1024 * 1024);
        assert_eq!(state.llm().model(), state.config().llm.model);
    }
}
