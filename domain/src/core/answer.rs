//! Answer value object
//!
//! The result of one question/answer exchange. Every failure mode is a
//! variant here rather than an error, so callers always get something to
//! show the user.

use serde::{Deserialize, Serialize};

/// Prefix for failures reported by the LLM service itself
pub const API_FAILURE_PREFIX: &str = "ERROR: LLM API call failed. Details: ";

/// Prefix for any other failure during the request
pub const UNEXPECTED_FAILURE_PREFIX: &str = "An unexpected error occurred: ";

/// Shown when the LLM client could not be initialized at startup
pub const UNAVAILABLE_MESSAGE: &str =
    "ERROR: The LLM service is currently unavailable. Check the API key configuration.";

/// Shown when an empty question is submitted
pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a non-empty question.";

/// Outcome of asking the LLM a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Answer {
    /// Answer text returned by the service, verbatim
    Text(String),
    /// The service rejected the request (auth, quota, malformed request)
    ApiFailure(String),
    /// Anything else went wrong (network, undecodable response)
    Unexpected(String),
    /// No LLM client is configured for this process
    Unavailable,
    /// The submitted question was empty
    EmptyQuestion,
}

impl Answer {
    /// Whether the service produced an answer
    pub fn is_success(&self) -> bool {
        matches!(self, Answer::Text(_))
    }

    /// Render the answer as the text shown to the user
    pub fn render(&self) -> String {
        match self {
            Answer::Text(text) => text.clone(),
            Answer::ApiFailure(details) => format!("{API_FAILURE_PREFIX}{details}"),
            Answer::Unexpected(details) => format!("{UNEXPECTED_FAILURE_PREFIX}{details}"),
            Answer::Unavailable => UNAVAILABLE_MESSAGE.to_string(),
            Answer::EmptyQuestion => EMPTY_QUESTION_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
