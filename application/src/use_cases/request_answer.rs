//! Request Answer use case.
//!
//! Sends one normalized question to the LLM together with the fixed
//! [`SYSTEM_INSTRUCTION`] and classifies the outcome into an [`Answer`].
//! Failures never escape as errors: a service-reported rejection becomes
//! [`Answer::ApiFailure`], anything else becomes [`Answer::Unexpected`].

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use qa_domain::{Answer, SYSTEM_INSTRUCTION};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for requesting a single answer from the LLM
#[derive(Clone)]
pub struct RequestAnswerUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl RequestAnswerUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Request an answer for an already-normalized question.
    ///
    /// An empty question is sent as-is; rejecting it is the caller's call.
    pub async fn execute(&self, normalized_question: &str) -> Answer {
        answer_for(normalized_question, self.gateway.as_ref()).await
    }
}

/// Request an answer and render it as the text shown to the user.
///
/// Returns the model's text verbatim on success, otherwise a message
/// starting with `"ERROR: LLM API call failed. Details: "` or
/// `"An unexpected error occurred: "`.
pub async fn request_answer(normalized_question: &str, gateway: &dyn LlmGateway) -> String {
    answer_for(normalized_question, gateway).await.render()
}

async fn answer_for(normalized_question: &str, gateway: &dyn LlmGateway) -> Answer {
    info!(model = %gateway.model(), "Requesting answer");
    debug!("Question: {}", normalized_question);

    match gateway
        .generate(SYSTEM_INSTRUCTION, normalized_question)
        .await
    {
        Ok(text) if text.is_empty() => {
            warn!("LLM returned an empty answer");
            Answer::Unexpected("The model returned an empty response".to_string())
        }
        Ok(text) => {
            debug!("Received answer ({} bytes)", text.len());
            Answer::Text(text)
        }
        Err(e) => classify(e),
    }
}

fn classify(error: GatewayError) -> Answer {
    if error.is_api_error() {
        warn!("LLM API call failed: {}", error);
        Answer::ApiFailure(error.to_string())
    } else {
        warn!("LLM request failed unexpectedly: {}", error);
        Answer::Unexpected(error.to_string())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use qa_domain::Model;
    use std::sync::Mutex;

    // === Mock implementations ===

    /// Gateway that replays a fixed reply and records every call
    pub(crate) struct StubGateway {
        model: Model,
        reply: Box<dyn Fn() -> Result<String, GatewayError> + Send + Sync>,
        pub(crate) calls: Mutex<Vec<(String, String)>>,
    }

    impl StubGateway {
        pub(crate) fn replying(
            reply: impl Fn() -> Result<String, GatewayError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                model: Model::default(),
                reply: Box::new(reply),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn answering(text: &'static str) -> Self {
            Self::replying(move || Ok(text.to_string()))
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for StubGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn generate(
            &self,
            system_instruction: &str,
            content: &str,
        ) -> Result<String, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push((system_instruction.to_string(), content.to_string()));
            (self.reply)()
        }
    }

    #[tokio::test]
    async fn test_success_returns_text_verbatim() {
        let gateway = StubGateway::answering("Paris");
        let answer = request_answer("what is the capital of france", &gateway).await;
        assert_eq!(answer, "Paris");
    }

    #[tokio::test]
    async fn test_sends_system_instruction_and_question() {
        let gateway = Arc::new(StubGateway::answering("Paris"));
        let use_case = RequestAnswerUseCase::new(gateway.clone());

        let answer = use_case.execute("what is the capital of france").await;

        assert_eq!(answer, Answer::Text("Paris".to_string()));
        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SYSTEM_INSTRUCTION);
        assert_eq!(calls[0].1, "what is the capital of france");
    }

    #[tokio::test]
    async fn test_api_error_is_classified() {
        let gateway = StubGateway::replying(|| {
            Err(GatewayError::Api {
                code: 400,
                status: "INVALID_ARGUMENT".to_string(),
                message: "API key not valid".to_string(),
            })
        });

        let answer = request_answer("hello", &gateway).await;

        assert!(answer.starts_with("ERROR: LLM API call failed. Details: "));
        assert!(answer.ends_with("400 INVALID_ARGUMENT. API key not valid"));
    }

    #[tokio::test]
    async fn test_generic_fault_is_unexpected() {
        let gateway = StubGateway::replying(|| {
            Err(GatewayError::ConnectionError("connection refused".to_string()))
        });

        let answer = request_answer("hello", &gateway).await;

        assert!(answer.starts_with("An unexpected error occurred: "));
        assert!(answer.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_empty_question_is_still_sent() {
        let gateway = Arc::new(StubGateway::answering("Ask me something."));
        let use_case = RequestAnswerUseCase::new(gateway.clone());

        let answer = use_case.execute("").await;

        assert!(answer.is_success());
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_reply_becomes_unexpected() {
        let gateway = StubGateway::answering("");
        let answer = RequestAnswerUseCase::new(Arc::new(gateway))
            .execute("hello")
            .await;
        assert!(matches!(answer, Answer::Unexpected(_)));
    }
}
