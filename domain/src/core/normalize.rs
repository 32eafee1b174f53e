//! Question normalization.
//!
//! Canonicalizes raw question text before it is sent to the LLM:
//! lowercase, ASCII punctuation removed, whitespace collapsed.

/// Normalize a raw question.
///
/// - Every character is lowercased.
/// - Characters from the ASCII punctuation set are deleted (not replaced),
///   so `"don't"` becomes `"dont"`.
/// - Runs of whitespace collapse to a single space and the result is trimmed.
///
/// Non-ASCII punctuation is left untouched. Never fails; `""` yields `""`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
