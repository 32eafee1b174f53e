//! Console output formatter for answers

use colored::Colorize;
use qa_application::AskOutcome;
use qa_domain::{Answer, Question};
use serde_json::json;

const ANSWER_HEADER: &str = "--- LLM ANSWER ---";
const ANSWER_FOOTER: &str = "------------------";

/// Formats questions and answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output on or off for the whole process
    pub fn set_color_enabled(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Banner printed when the interactive loop starts
    pub fn banner(available: bool, model: Option<&str>) -> String {
        let mut output = format!("{}\n{}", " NLP Q&A System - CLI".cyan().bold(), "-".repeat(30));
        if !available {
            output.push_str(&format!(
                "\n{}",
                "LLM service unavailable: set GEMINI_API_KEY".yellow()
            ));
        } else if let Some(model) = model {
            output.push_str(&format!("\n{} {}", "Model:".dimmed(), model));
        }
        output
    }

    /// Echo of the normalized question before it is sent
    pub fn format_processing(question: &Question) -> String {
        format!(
            "{} '{}'",
            "Processing question:".bold(),
            question.normalized()
        )
    }

    /// The answer framed between header and footer rules
    pub fn format_answer(answer: &Answer) -> String {
        let body = if answer.is_success() {
            answer.render()
        } else {
            answer.render().red().to_string()
        };
        format!(
            "{}\n{}\n{}",
            ANSWER_HEADER.cyan().bold(),
            body,
            ANSWER_FOOTER.cyan()
        )
    }

    /// Format a pipeline outcome as JSON
    pub fn format_json(outcome: &AskOutcome) -> String {
        let value = json!({
            "question": outcome.question.raw(),
            "normalized_question": outcome.question.normalized(),
            "answer": outcome.answer.render(),
            "success": outcome.answer.is_success(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
