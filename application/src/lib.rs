//! Application layer for llm-qa
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::ask_question::{AskOutcome, AskQuestionUseCase};
pub use use_cases::request_answer::{RequestAnswerUseCase, request_answer};
