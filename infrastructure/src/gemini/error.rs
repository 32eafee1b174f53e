//! Error types for the Gemini adapter

use thiserror::Error;

/// Result type alias for Gemini adapter construction
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that prevent the Gemini gateway from being created
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY not found in environment variables")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
