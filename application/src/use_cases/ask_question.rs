//! Ask Question use case.
//!
//! The full pipeline used by every front end: reject empty input,
//! normalize, then request an answer. The gateway is optional so a process
//! whose LLM client failed to initialize can keep serving the
//! "unavailable" message.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::request_answer::RequestAnswerUseCase;
use qa_domain::{Answer, Question};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Result of one pass through the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskOutcome {
    pub question: Question,
    pub answer: Answer,
}

/// Use case for answering a raw user question
#[derive(Clone)]
pub struct AskQuestionUseCase {
    requester: Option<RequestAnswerUseCase>,
}

impl AskQuestionUseCase {
    /// Create the pipeline. `None` means no LLM client is available.
    pub fn new(gateway: Option<Arc<dyn LlmGateway>>) -> Self {
        Self {
            requester: gateway.map(RequestAnswerUseCase::new),
        }
    }

    /// Whether an LLM client is configured
    pub fn is_available(&self) -> bool {
        self.requester.is_some()
    }

    /// Answer a raw question
    pub async fn execute(&self, raw: &str) -> AskOutcome {
        self.execute_with_progress(raw, &NoProgress).await
    }

    /// Answer a raw question, reporting progress around the LLM call
    pub async fn execute_with_progress(
        &self,
        raw: &str,
        progress: &dyn ProgressNotifier,
    ) -> AskOutcome {
        let Some(question) = Question::try_new(raw) else {
            debug!("Rejected empty question");
            return AskOutcome {
                question: Question::new(raw),
                answer: Answer::EmptyQuestion,
            };
        };

        let Some(requester) = &self.requester else {
            return AskOutcome {
                question,
                answer: Answer::Unavailable,
            };
        };

        progress.on_request_start(&question);
        let answer = requester.execute(question.normalized()).await;
        progress.on_request_complete(&answer);

        AskOutcome { question, answer }
    }
}
