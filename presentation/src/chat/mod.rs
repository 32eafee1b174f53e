//! Interactive chat module
//!
//! Provides a reedline-based prompt loop for asking questions.

mod repl;

pub use repl::{ChatRepl, LineAction, LineReader, ReedlineReader, ReplInput, classify_line};
