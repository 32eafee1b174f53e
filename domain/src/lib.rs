//! Domain layer for llm-qa
//!
//! This crate contains the question normalizer and the value objects
//! exchanged between layers. It has no I/O and no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Pipeline
//!
//! 1. A raw question is normalized ([`normalize`]): lowercased, ASCII
//!    punctuation removed, whitespace collapsed.
//! 2. The normalized text is sent to an LLM with [`SYSTEM_INSTRUCTION`].
//! 3. The outcome is an [`Answer`], either the model's text or a
//!    classified failure that renders to a user-facing message.

pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use self::core::{
    answer::{
        API_FAILURE_PREFIX, Answer, EMPTY_QUESTION_MESSAGE, UNAVAILABLE_MESSAGE,
        UNEXPECTED_FAILURE_PREFIX,
    },
    model::Model,
    normalize::normalize,
    question::Question,
};
pub use prompt::SYSTEM_INSTRUCTION;
