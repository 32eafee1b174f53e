//! Gemini LLM Gateway implementation

use super::error::{GeminiError, Result};
use super::protocol::{GenerateContentRequest, GenerateContentResponse, api_error};
use crate::config::FileLlmConfig;
use async_trait::async_trait;
use qa_application::{GatewayError, LlmGateway};
use qa_domain::Model;
use tracing::{debug, info};

/// Public Gemini API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// LLM Gateway implementation for the Gemini REST API
///
/// Holds one `reqwest::Client` for the life of the process. The client is
/// only read after construction, so the gateway can be shared across
/// concurrent requests behind an `Arc`.
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    api_key: String,
    model: Model,
    base_url: String,
}

impl GeminiLlmGateway {
    /// Create a gateway for `model` using the public endpoint
    pub fn new(api_key: impl Into<String>, model: Model) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("llm-qa/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a gateway from the `[llm]` config section
    pub fn from_config(config: &FileLlmConfig) -> Result<Self> {
        let api_key = config.api_key().ok_or(GeminiError::MissingApiKey)?;
        let gateway = Self::new(api_key, config.model.clone())?;

        let gateway = match &config.base_url {
            Some(url) => gateway.with_base_url(url)?,
            None => gateway,
        };

        info!(model = %gateway.model, "GeminiLlmGateway initialized");
        Ok(gateway)
    }

    /// Point the gateway at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GeminiError::InvalidBaseUrl(base_url));
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(
        &self,
        system_instruction: &str,
        content: &str,
    ) -> std::result::Result<String, GatewayError> {
        let request = GenerateContentRequest::single_turn(system_instruction, content);

        debug!(url = %self.endpoint(), "Calling Gemini generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            debug!(%status, "Gemini returned an error response");
            return Err(api_error(status, &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::InvalidResponse(format!("Failed to parse Gemini response: {}", e))
        })?;

        parsed
            .text()
            .ok_or_else(|| GatewayError::InvalidResponse(parsed.missing_text_reason()))
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::{HeaderMap, StatusCode},
        routing::post,
    };
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn gateway(base_url: &str) -> GeminiLlmGateway {
        GeminiLlmGateway::new("test-key", Model::Gemini25Flash)
            .unwrap()
            .with_base_url(base_url)
            .unwrap()
    }

    #[test]
    fn test_missing_api_key() {
        assert!(matches!(
            GeminiLlmGateway::new("  ", Model::default()),
            Err(GeminiError::MissingApiKey)
        ));
        assert!(matches!(
            GeminiLlmGateway::from_config(&FileLlmConfig::default()),
            Err(GeminiError::MissingApiKey)
        ));
    }

    #[test]
    fn test_endpoint_uses_model_and_base_url() {
        let gw = gateway("http://localhost:8080/");
        assert_eq!(
            gw.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(matches!(
            GeminiLlmGateway::new("k", Model::default())
                .unwrap()
                .with_base_url("localhost"),
            Err(GeminiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_from_config_applies_base_url() {
        let config = FileLlmConfig {
            model: Model::Gemini25Pro,
            api_key: Some("k".to_string()),
            base_url: Some("http://127.0.0.1:9".to_string()),
        };
        let gw = GeminiLlmGateway::from_config(&config).unwrap();
        assert_eq!(gw.model(), &Model::Gemini25Pro);
        assert!(gw.endpoint().starts_with("http://127.0.0.1:9/"));
    }

    #[tokio::test]
    async fn test_generate_success_sends_instruction_and_key() {
        let seen: Arc<Mutex<Option<(HeaderMap, Value)>>> = Arc::new(Mutex::new(None));
        let captured = seen.clone();
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let captured = captured.clone();
                async move {
                    *captured.lock().unwrap() = Some((headers, body));
                    Json(json!({
                        "candidates": [{
                            "content": {"role": "model", "parts": [{"text": "Paris"}]},
                            "finishReason": "STOP"
                        }]
                    }))
                }
            }),
        );
        let base_url = spawn_stub(router).await;

        let answer = gateway(&base_url)
            .generate("Be concise.", "what is the capital of france")
            .await
            .unwrap();

        assert_eq!(answer, "Paris");
        let (headers, body) = seen.lock().unwrap().take().unwrap();
        assert_eq!(headers.get("x-goog-api-key").unwrap(), "test-key");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be concise.");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "what is the capital of france"
        );
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({
                        "error": {
                            "code": 429,
                            "message": "Quota exceeded",
                            "status": "RESOURCE_EXHAUSTED"
                        }
                    })),
                )
            }),
        );
        let base_url = spawn_stub(router).await;

        let err = gateway(&base_url).generate("sys", "q").await.unwrap_err();

        assert!(err.is_api_error());
        assert_eq!(err.to_string(), "429 RESOURCE_EXHAUSTED. Quota exceeded");
    }

    #[tokio::test]
    async fn test_generate_empty_candidates_is_invalid_response() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async { Json(json!({"candidates": []})) }),
        );
        let base_url = spawn_stub(router).await;

        let err = gateway(&base_url).generate("sys", "q").await.unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_generate_garbage_body_is_invalid_response() {
        let router = Router::new().route("/v1beta/models/:call", post(|| async { "not json" }));
        let base_url = spawn_stub(router).await;

        let err = gateway(&base_url).generate("sys", "q").await.unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
        assert!(!err.is_api_error());
    }

    #[tokio::test]
    async fn test_generate_connection_refused() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = gateway(&format!("http://{}", addr))
            .generate("sys", "q")
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
