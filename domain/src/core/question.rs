//! Question value object

use super::normalize::normalize;
use serde::{Deserialize, Serialize};

/// A user question together with its normalized form (Value Object)
///
/// The normalized text is derived once at construction and is what gets
/// sent to the LLM. The raw text is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    raw: String,
    normalized: String,
}

impl Question {
    /// Create a new question, normalizing the raw text
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// Try to create a new question, returning None if nothing was entered.
    /// Whitespace-only text is still a question; it normalizes to "".
    pub fn try_new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self::new(raw))
        }
    }

    /// The text exactly as the user typed it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical form sent to the LLM
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}
