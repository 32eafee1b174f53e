//! Infrastructure layer for llm-qa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    API_KEY_ENV, ConfigLoader, ConfigValidationError, FileConfig, FileLlmConfig,
    FileOutputConfig, FileReplConfig, FileServerConfig,
};
pub use gemini::{
    error::{GeminiError, Result},
    gateway::{DEFAULT_BASE_URL, GeminiLlmGateway},
};
