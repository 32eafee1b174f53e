//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted LLM service.

use async_trait::async_trait;
use qa_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The service received the request and rejected it
    #[error("{code} {status}. {message}")]
    Api {
        code: u16,
        status: String,
        message: String,
    },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether the error was reported by the service itself
    /// (authentication, quota, malformed request)
    pub fn is_api_error(&self) -> bool {
        matches!(self, GatewayError::Api { .. })
    }
}

/// Gateway for LLM communication
///
/// The only seam between the answer pipeline and the outside world.
/// Implementations (adapters) live in the infrastructure layer; tests
/// substitute deterministic doubles.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model this gateway sends requests to
    fn model(&self) -> &Model;

    /// Generate an answer for `content` under `system_instruction`.
    ///
    /// Issues exactly one request. Returns the answer text on success.
    async fn generate(&self, system_instruction: &str, content: &str)
    -> Result<String, GatewayError>;
}
