//! LLM-backed résumé parsing with heuristic fallback.
//!
//! The remote path is strictly best-effort: a missing credential, a model
//! outage, or unusable output all degrade to [`HeuristicParser`]. Callers
//! never observe an error from this parser.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::config::Config;
use crate::llm_client::{complete_with_fallback, CompletionApi, GroqClient};
use crate::models::{merge_with_defaults, CandidateRecord};
use crate::parse::heuristic::HeuristicParser;
use crate::parse::prompts::extraction_prompt;

/// Two-tier résumé parser. With a configured credential it calls the
/// completion API with ordered model fallback; without one it runs in
/// local-only mode and every call delegates to the heuristic parser.
pub struct LlmParser {
    api: Option<Arc<dyn CompletionApi>>,
    models: Vec<String>,
    fallback: HeuristicParser,
}

impl LlmParser {
    pub fn new(config: &Config) -> Self {
        let api = config.groq_api_key.as_ref().map(|key| {
            Arc::new(GroqClient::new(key.clone(), config.llm_base_url.clone()))
                as Arc<dyn CompletionApi>
        });
        if api.is_none() {
            debug!("no LLM credential configured; parser running in local-only mode");
        }
        Self {
            api,
            models: config.llm_models.clone(),
            fallback: HeuristicParser,
        }
    }

    /// Builds a parser over an explicit backend. Used by tests and by
    /// deployments that bring their own completion transport.
    pub fn with_api(api: Arc<dyn CompletionApi>, models: Vec<String>) -> Self {
        Self {
            api: Some(api),
            models,
            fallback: HeuristicParser,
        }
    }

    /// Builds a parser that never makes a remote call.
    pub fn local_only() -> Self {
        Self {
            api: None,
            models: Vec::new(),
            fallback: HeuristicParser,
        }
    }

    /// Parses résumé text into a [`CandidateRecord`]. Total: every failure
    /// path ends in the heuristic parser.
    pub async fn parse(&self, text: &str) -> CandidateRecord {
        if text.trim().is_empty() {
            return self.fallback.parse(text);
        }

        let Some(api) = &self.api else {
            return self.fallback.parse(text);
        };

        let prompt = extraction_prompt(text);
        match complete_with_fallback(api.as_ref(), &self.models, &prompt).await {
            Ok(raw) => match recover_json(&raw) {
                Some(value) => merge_with_defaults(value),
                None => {
                    error!("completion contained no recoverable JSON; using heuristic parser");
                    self.fallback.parse(text)
                }
            },
            Err(e) => {
                error!("resume extraction failed across all models: {e}; using heuristic parser");
                self.fallback.parse(text)
            }
        }
    }
}

/// Pulls a JSON value out of model output: direct parse first (after fence
/// stripping), then the span from the first `{` to the last `}`.
fn recover_json(raw: &str) -> Option<Value> {
    let candidate = strip_json_fences(raw);
    if let Ok(value) = serde_json::from_str(candidate) {
        return Some(value);
    }

    let start = candidate.find('{')?;
    let end = candidate.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&candidate[start..=end]).ok()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
