//! pdf-chat: single-document Q&A service backed by a local Ollama model
//!
//! Upload one PDF over HTTP, then ask questions about it or request a
//! summary. Extracted text lives in process memory only; each successful
//! upload replaces the previous document, and nothing survives a restart.

pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod llm;
pub mod prompt;
pub mod server;

pub use config::AppConfig;
pub use context::DocumentContext;
pub use error::{Error, Result};
pub use server::PdfChatServer;
