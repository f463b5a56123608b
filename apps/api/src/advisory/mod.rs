//! AI Advisory Client — the single point of entry for all LLM calls.
//!
//! Every failure mode (missing credential, transport error, non-2xx status,
//! malformed payload, empty content) is absorbed here and surfaces as `None`.
//! Callers never see a raised fault from this module; the rule-based
//! analysis stays trustworthy regardless of what happens on the network.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod handlers;
pub mod prompts;
pub mod sanitize;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// The model used for all advisory calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "mistralai/mistral-7b-instruct";
const TEMPERATURE: f32 = 0.4;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Per-variant generation budgets. The critique gets the most room; the
/// list-shaped outputs need less.
const CAREER_MAX_TOKENS: u32 = 400;
const IMPROVEMENTS_MAX_TOKENS: u32 = 800;
const INTERVIEW_MAX_TOKENS: u32 = 600;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

/// Pulls the first non-empty completion text out of a chat response.
/// Anything that deviates from the expected shape is treated as absent.
fn first_content(response: ChatResponse) -> Option<String> {
    let text = response
        .choices
        .into_iter()
        .next()?
        .message?
        .content?
        .trim()
        .to_string();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// One chat completion per call. `None` means the advisory is unavailable —
/// implementations must not error. Carried in `AppState` as
/// `Arc<dyn AdvisoryBackend>`, selected once at startup.
#[async_trait]
pub trait AdvisoryBackend: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Option<String>;
}

/// Live backend talking to the OpenRouter chat-completions endpoint.
/// One outbound request per call; no retries, no caching, no deduplication.
pub struct OpenRouterBackend {
    client: Client,
    api_key: String,
    api_url: String,
}

impl OpenRouterBackend {
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, OPENROUTER_API_URL)
    }

    /// Tests point the backend at a local stub server through this.
    fn with_api_url(api_key: String, api_url: impl Into<String>) -> Self {
        OpenRouterBackend {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl AdvisoryBackend for OpenRouterBackend {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Option<String> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", "https://careerlens.app")
            .header("X-Title", "CareerLens AI")
            .json(&request_body)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!("Advisory request failed: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Advisory API returned {status}: {body}");
            return None;
        }

        match response.json::<ChatResponse>().await {
            Ok(parsed) => first_content(parsed),
            Err(e) => {
                warn!("Advisory response did not match expected shape: {e}");
                None
            }
        }
    }
}

/// Backend used when no API key is configured. Always unavailable, so no
/// call site needs to branch on the credential.
pub struct DisabledBackend;

#[async_trait]
impl AdvisoryBackend for DisabledBackend {
    async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Option<String> {
        debug!("Advisory backend disabled (no API key configured)");
        None
    }
}

/// Selects the backend once at startup based on credential presence.
pub fn build_backend(api_key: Option<String>) -> Arc<dyn AdvisoryBackend> {
    match api_key {
        Some(key) => Arc::new(OpenRouterBackend::new(key)),
        None => Arc::new(DisabledBackend),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// The three advisory operations
// ────────────────────────────────────────────────────────────────────────────

/// Explains why the suggested roles fit the detected skills.
pub async fn career_explanation(
    backend: &dyn AdvisoryBackend,
    skills: &[String],
    roles: &[String],
) -> Option<String> {
    let prompt = prompts::career_explanation_prompt(skills, roles);
    backend.complete(&prompt, CAREER_MAX_TOKENS).await
}

/// Critiques the resume's bullet points and suggests improvements.
pub async fn improvement_suggestions(
    backend: &dyn AdvisoryBackend,
    resume_text: &str,
) -> Option<String> {
    let prompt = prompts::improvement_prompt(resume_text);
    backend.complete(&prompt, IMPROVEMENTS_MAX_TOKENS).await
}

/// Generates interview questions; known model artifact tokens are stripped
/// from successful responses before they reach the caller.
pub async fn interview_questions(
    backend: &dyn AdvisoryBackend,
    skills: &[String],
    roles: &[String],
) -> Option<String> {
    let prompt = prompts::interview_prompt(skills, roles);
    let raw = backend.complete(&prompt, INTERVIEW_MAX_TOKENS).await?;
    Some(sanitize::strip_model_artifacts(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ChatResponse {
        serde_json::from_str(json).expect("test JSON should deserialize")
    }

    /// Backend stub that always succeeds with a fixed completion.
    struct CannedBackend(&'static str);

    #[async_trait]
    impl AdvisoryBackend for CannedBackend {
        async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    /// Spawns a local HTTP server answering every POST with the given
    /// status and body; returns the URL to aim the backend at.
    async fn spawn_stub_server(status: axum::http::StatusCode, body: &'static str) -> String {
        use axum::{routing::post, Router};

        let app = Router::new().route("/v1/chat/completions", post(move || async move { (status, body) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        format!("http://{addr}/v1/chat/completions")
    }

    #[test]
    fn test_first_content_extracts_and_trims() {
        let response = parse(
            r#"{"choices": [{"message": {"content": "  Roles fit because...  "}}]}"#,
        );
        assert_eq!(first_content(response).as_deref(), Some("Roles fit because..."));
    }

    #[test]
    fn test_empty_choices_is_absent() {
        assert!(first_content(parse(r#"{"choices": []}"#)).is_none());
    }

    #[test]
    fn test_missing_choices_key_is_absent() {
        assert!(first_content(parse(r#"{}"#)).is_none());
    }

    #[test]
    fn test_null_content_is_absent() {
        let response = parse(r#"{"choices": [{"message": {"content": null}}]}"#);
        assert!(first_content(response).is_none());
    }

    #[test]
    fn test_whitespace_only_content_is_absent() {
        let response = parse(r#"{"choices": [{"message": {"content": "   \n  "}}]}"#);
        assert!(first_content(response).is_none());
    }

    #[tokio::test]
    async fn test_disabled_backend_is_always_absent() {
        let backend = DisabledBackend;
        assert!(backend.complete("any prompt", 400).await.is_none());
    }

    #[tokio::test]
    async fn test_disabled_backend_makes_all_variants_absent() {
        let skills = vec!["Python".to_string()];
        let roles = vec!["Software Engineer (Entry Level)".to_string()];
        let backend = DisabledBackend;

        assert!(career_explanation(&backend, &skills, &roles).await.is_none());
        assert!(improvement_suggestions(&backend, "resume").await.is_none());
        assert!(interview_questions(&backend, &skills, &roles).await.is_none());
    }

    #[tokio::test]
    async fn test_server_error_yields_absent_result() {
        let url =
            spawn_stub_server(axum::http::StatusCode::INTERNAL_SERVER_ERROR, "upstream down")
                .await;
        let backend = OpenRouterBackend::with_api_url("sk-test".to_string(), url);

        assert!(backend.complete("any prompt", 400).await.is_none());
    }

    #[tokio::test]
    async fn test_client_error_status_yields_absent_result() {
        let url = spawn_stub_server(
            axum::http::StatusCode::UNAUTHORIZED,
            r#"{"error": "bad key"}"#,
        )
        .await;
        let backend = OpenRouterBackend::with_api_url("sk-wrong".to_string(), url);

        assert!(backend.complete("any prompt", 400).await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_absent_result() {
        // Bind then drop to get a port with nothing listening on it.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let backend = OpenRouterBackend::with_api_url(
            "sk-test".to_string(),
            format!("http://{addr}/v1/chat/completions"),
        );

        assert!(backend.complete("any prompt", 400).await.is_none());
    }

    #[tokio::test]
    async fn test_successful_completion_round_trips() {
        let url = spawn_stub_server(
            axum::http::StatusCode::OK,
            r#"{"choices": [{"message": {"content": "Roles fit well."}}]}"#,
        )
        .await;
        let backend = OpenRouterBackend::with_api_url("sk-test".to_string(), url);

        assert_eq!(
            backend.complete("any prompt", 400).await.as_deref(),
            Some("Roles fit well.")
        );
    }

    #[tokio::test]
    async fn test_interview_questions_strips_template_tokens() {
        let skills = vec!["Python".to_string()];
        let roles = vec!["Machine Learning Engineer".to_string()];
        let backend = CannedBackend("<s>[INST] 1. Explain overfitting. [/INST]");

        let questions = interview_questions(&backend, &skills, &roles)
            .await
            .expect("canned backend always succeeds");

        assert_eq!(questions, "1. Explain overfitting.");
        assert!(!questions.contains("[INST]"));
        assert!(!questions.contains("<s>"));
    }

    #[tokio::test]
    async fn test_career_explanation_passes_text_through_unaltered() {
        let skills = vec!["Python".to_string()];
        let roles = vec!["Backend / Data Engineer".to_string()];
        let backend = CannedBackend("These roles fit because of the Python skill set.");

        assert_eq!(
            career_explanation(&backend, &skills, &roles).await.as_deref(),
            Some("These roles fit because of the Python skill set.")
        );
    }

    #[test]
    fn test_factory_selects_disabled_without_key() {
        // Both arms must produce a usable backend; the disabled arm must not
        // require network or credentials.
        let _enabled = build_backend(Some("sk-test".to_string()));
        let _disabled = build_backend(None);
    }
}
