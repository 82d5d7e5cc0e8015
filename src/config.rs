//! Configuration for the document Q&A service

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Ollama/LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Defaults, overridden by environment variables where set and non-empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Some(host) = load_env_optional("PDF_CHAT_HOST") {
            config.server.host = host;
        }
        if let Some(port) = load_env_optional("PDF_CHAT_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PDF_CHAT_PORT".to_string()))?;
        }
        if let Some(dir) = load_env_optional("PDF_CHAT_UPLOAD_DIR") {
            config.server.upload_dir = PathBuf::from(dir);
        }
        if let Some(url) = load_env_optional("OLLAMA_URL") {
            config.llm.base_url = url;
        }
        if let Some(model) = load_env_optional("OLLAMA_MODEL") {
            config.llm.model = model;
        }
        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Maximum upload size in bytes (default: 16 MiB)
    pub max_upload_size: usize,
    /// Directory prepared for uploads at startup
    pub upload_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_size: 16 * 1024 * 1024, // 16 MiB
            upload_dir: PathBuf::from("uploads"),
        }
    }
}

/// LLM (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Chat model name
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "mistral".to_string(),
        }
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
