//! Core domain concepts.
//!
//! - [`normalize::normalize`] — canonicalize raw question text
//! - [`question::Question`] — raw + normalized question
//! - [`answer::Answer`] — answer text or a classified failure
//! - [`model::Model`] — Gemini model identifiers

pub mod answer;
pub mod model;
pub mod normalize;
pub mod question;
