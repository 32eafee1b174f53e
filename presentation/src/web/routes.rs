//! Routes for the question form

use super::page::{self, PageView};
use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use qa_application::AskQuestionUseCase;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared across handlers
pub struct WebState {
    pub use_case: AskQuestionUseCase,
}

type WebStateArc = Arc<WebState>;

/// Submitted form fields
#[derive(Debug, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub question: String,
}

/// Build the application router
pub fn router(use_case: AskQuestionUseCase) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_question))
        .route("/health", get(health))
        .with_state(Arc::new(WebState { use_case }))
        .layer(TraceLayer::new_for_http())
}

async fn show_form() -> Html<String> {
    Html(page::render(&PageView::default()))
}

async fn submit_question(
    State(state): State<WebStateArc>,
    Form(form): Form<QuestionForm>,
) -> Html<String> {
    info!("Question submitted ({} bytes)", form.question.len());

    let outcome = state.use_case.execute(&form.question).await;
    let answer = outcome.answer.render();

    Html(page::render(&PageView {
        user_question: outcome.question.raw(),
        processed_question: outcome.question.normalized(),
        llm_response: &answer,
    }))
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use qa_application::{GatewayError, LlmGateway};
    use qa_domain::Model;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct CountingGateway {
        model: Model,
        calls: AtomicUsize,
        reply: Result<&'static str, &'static str>,
    }

    impl CountingGateway {
        fn new(reply: Result<&'static str, &'static str>) -> Arc<Self> {
            Arc::new(Self {
                model: Model::default(),
                calls: AtomicUsize::new(0),
                reply,
            })
        }
    }

    #[async_trait]
    impl LlmGateway for CountingGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn generate(&self, _system: &str, _content: &str) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(message) => Err(GatewayError::Api {
                    code: 403,
                    status: "PERMISSION_DENIED".to_string(),
                    message: message.to_string(),
                }),
            }
        }
    }

    async fn post_form(app: Router, body: &'static str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_shows_placeholder() {
        let app = router(AskQuestionUseCase::new(None));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Enter a question above to get an answer."));
    }

    #[tokio::test]
    async fn test_empty_question_makes_no_call() {
        let gateway = CountingGateway::new(Ok("unused"));
        let app = router(AskQuestionUseCase::new(Some(gateway.clone())));

        let (status, html) = post_form(app, "question=").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Please enter a non-empty question."));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_field_counts_as_empty() {
        let gateway = CountingGateway::new(Ok("unused"));
        let app = router(AskQuestionUseCase::new(Some(gateway.clone())));

        let (_, html) = post_form(app, "").await;

        assert!(html.contains("Please enter a non-empty question."));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_whitespace_question_is_forwarded() {
        let gateway = CountingGateway::new(Ok("Please ask a question."));
        let app = router(AskQuestionUseCase::new(Some(gateway.clone())));

        let (status, html) = post_form(app, "question=+++").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("Please enter a non-empty question."));
        assert!(html.contains("Please ask a question."));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_question_renders_raw_normalized_and_answer() {
        let gateway = CountingGateway::new(Ok("Paris"));
        let app = router(AskQuestionUseCase::new(Some(gateway.clone())));

        let (_, html) =
            post_form(app, "question=What+is+the+Capital+of+France%3F").await;

        assert!(html.contains("What is the Capital of France?"));
        assert!(html.contains("<code>what is the capital of france</code>"));
        assert!(html.contains("Paris"));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_api_failure_is_rendered() {
        let gateway = CountingGateway::new(Err("API key expired"));
        let app = router(AskQuestionUseCase::new(Some(gateway)));

        let (status, html) = post_form(app, "question=hi").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("ERROR: LLM API call failed. Details: 403 PERMISSION_DENIED. API key expired"));
    }

    #[tokio::test]
    async fn test_unavailable_service_message() {
        let app = router(AskQuestionUseCase::new(None));

        let (_, html) = post_form(app, "question=hello").await;

        assert!(html.contains(
            "ERROR: The LLM service is currently unavailable. Check the API key configuration."
        ));
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(AskQuestionUseCase::new(None));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
