use std::path::Path;

use anyhow::{bail, Result};

use crate::extract::OcrEngine;
use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODELS};

/// Process-wide configuration loaded from environment variables.
///
/// Nothing here is strictly required: a missing `GROQ_API_KEY` puts the
/// parser into local-only mode rather than failing. Misconfiguration that
/// can only bite mid-request (an explicit OCR binary that does not exist,
/// an explicitly empty model list) fails fast at startup instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub llm_base_url: String,
    /// Ordered model-fallback list, highest priority first.
    pub llm_models: Vec<String>,
    pub tesseract_cmd: Option<String>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            llm_base_url: DEFAULT_BASE_URL.to_string(),
            llm_models: default_models(),
            tesseract_cmd: None,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let tesseract_cmd = optional_env("TESSERACT_CMD");
        if let Some(cmd) = &tesseract_cmd {
            if !Path::new(cmd).exists() {
                bail!("TESSERACT_CMD points to '{cmd}', which does not exist");
            }
        }

        let llm_models = match optional_env("LLM_MODELS") {
            Some(raw) => {
                let models = parse_model_list(&raw);
                if models.is_empty() {
                    bail!("LLM_MODELS is set but contains no model identifiers");
                }
                models
            }
            None => default_models(),
        };

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            llm_base_url: optional_env("LLM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_models,
            tesseract_cmd,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn ocr_engine(&self) -> OcrEngine {
        match &self.tesseract_cmd {
            Some(cmd) => OcrEngine::new(cmd.clone()),
            None => OcrEngine::default(),
        }
    }
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|model| model.to_string()).collect()
}

/// Splits a comma-separated model list, dropping empty segments.
fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
