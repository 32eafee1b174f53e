//! Presentation layer for llm-qa
//!
//! This crate contains the CLI definition, console output formatting,
//! progress reporting, the interactive prompt loop and the web form.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat, RunMode};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
