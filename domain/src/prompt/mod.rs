//! Prompt text sent alongside every question

/// System instruction attached to every answer request
pub const SYSTEM_INSTRUCTION: &str = "You are an expert Question-and-Answering system. Provide a concise and accurate answer to the user's question.";
