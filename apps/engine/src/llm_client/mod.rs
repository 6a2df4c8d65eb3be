//! LLM client — the single point of entry for remote completion calls.
//!
//! No other module talks to the completion API directly. Model identifiers
//! are configuration data tried in priority order; the first model that
//! returns non-empty content wins.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// OpenAI-compatible chat-completions endpoint of the Groq API.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model priority order. Overridable through configuration.
pub const DEFAULT_MODELS: &[&str] = &[
    "llama-3.3-70b-specdec",
    "llama-3.3-70b-versatile",
    "llama-3.2-90b-text-preview",
];

/// Per-attempt request timeout. A stalled model counts as a failed attempt
/// and the fallback moves on, the same as any other error.
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,

    #[error("no completion model produced output")]
    AllModelsFailed,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// A completion backend: one model attempt per call. Production uses
/// [`GroqClient`]; tests substitute scripted implementations.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Groq-backed completion client. Deterministic sampling (temperature 0),
/// one user-role message per request.
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl CompletionApi for GroqClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        Ok(content)
    }
}

/// Tries each model in order, returning the first non-empty completion.
/// When every model fails, the deepest failure propagates to the caller.
pub async fn complete_with_fallback(
    api: &dyn CompletionApi,
    models: &[String],
    prompt: &str,
) -> Result<String, LlmError> {
    let mut last_error: Option<LlmError> = None;

    for model in models {
        debug!("trying completion model: {model}");
        match api.complete(model, prompt).await {
            Ok(content) if content.trim().is_empty() => {
                warn!("model {model} returned empty content");
                last_error = Some(LlmError::EmptyContent);
            }
            Ok(content) => {
                debug!("model {model} returned {} bytes", content.len());
                return Ok(content);
            }
            Err(e) => {
                warn!("model {model} failed: {e}");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or(LlmError::AllModelsFailed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Fails listed models with the given status; everything else succeeds
    /// with the fixed reply.
    struct ScriptedApi {
        failures: HashMap<String, u16>,
        reply: String,
    }

    #[async_trait]
    impl CompletionApi for ScriptedApi {
        async fn complete(&self, model: &str, _prompt: &str) -> Result<String, LlmError> {
            match self.failures.get(model) {
                Some(&status) => Err(LlmError::Api {
                    status,
                    message: format!("{model} is down"),
                }),
                None => Ok(self.reply.clone()),
            }
        }
    }

    fn models(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[tokio::test]
    async fn test_first_healthy_model_wins() {
        let api = ScriptedApi {
            failures: HashMap::from([("a".to_string(), 500), ("b".to_string(), 502)]),
            reply: "hello".to_string(),
        };
        let content = complete_with_fallback(&api, &models(&["a", "b", "c"]), "prompt")
            .await
            .unwrap();
        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn test_no_fallback_needed_when_first_succeeds() {
        let api = ScriptedApi {
            failures: HashMap::new(),
            reply: "hello".to_string(),
        };
        let content = complete_with_fallback(&api, &models(&["a", "b"]), "prompt")
            .await
            .unwrap();
        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn test_all_models_failing_propagates_last_error() {
        let api = ScriptedApi {
            failures: HashMap::from([
                ("a".to_string(), 500),
                ("b".to_string(), 502),
                ("c".to_string(), 503),
            ]),
            reply: String::new(),
        };
        let err = complete_with_fallback(&api, &models(&["a", "b", "c"]), "prompt")
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, .. } => assert_eq!(status, 503),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_content_moves_to_next_model() {
        struct EmptyThenHello;

        #[async_trait]
        impl CompletionApi for EmptyThenHello {
            async fn complete(&self, model: &str, _prompt: &str) -> Result<String, LlmError> {
                if model == "a" {
                    Ok(String::new())
                } else {
                    Ok("hello".to_string())
                }
            }
        }

        let content = complete_with_fallback(&EmptyThenHello, &models(&["a", "b"]), "prompt")
            .await
            .unwrap();
        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn test_empty_model_list_fails() {
        let api = ScriptedApi {
            failures: HashMap::new(),
            reply: "hello".to_string(),
        };
        let err = complete_with_fallback(&api, &[], "prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::AllModelsFailed));
    }
}
