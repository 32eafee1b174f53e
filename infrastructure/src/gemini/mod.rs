//! Gemini REST adapter
//!
//! Implements the [`LlmGateway`](qa_application::LlmGateway) port on top of
//! the `generateContent` endpoint using `reqwest`.

pub mod error;
pub mod gateway;
pub mod protocol;
