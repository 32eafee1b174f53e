//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use qa_domain::Model;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Default address for the web form
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("base_url must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),
}

/// Raw LLM configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Gemini model to query
    pub model: Model,
    /// API key. Usually supplied through `GEMINI_API_KEY` instead.
    pub api_key: Option<String>,
    /// Override for the Gemini API endpoint
    pub base_url: Option<String>,
}

impl FileLlmConfig {
    /// The configured API key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Raw web server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the web form listens on
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the "Thinking..." spinner
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete configuration file
///
/// # Example
///
/// ```toml
/// [llm]
/// model = "gemini-2.5-flash"
///
/// [server]
/// bind = "0.0.0.0:8080"
///
/// [repl]
/// show_progress = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// LLM settings
    pub llm: FileLlmConfig,
    /// Web server settings
    pub server: FileServerConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.llm.model.as_str().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigValidationError::InvalidBindAddress(
                self.server.bind.clone(),
            ));
        }

        if let Some(url) = &self.llm.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigValidationError::InvalidBaseUrl(url.clone()));
            }
        }

        Ok(())
    }

    /// Copy of the configuration that is safe to print
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.llm.api_key.is_some() {
            config.llm.api_key = Some("********".to_string());
        }
        config
    }
}
