//! Configuration types for the OpenAI-compatible provider.

use serde::{Deserialize, Serialize};

/// Default OpenAI API base URL.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Default base URL for a local Ollama server's OpenAI-compatible endpoint.
pub const OLLAMA_API_BASE: &str = "http://localhost:11434/v1";

/// Configuration for an OpenAI-compatible chat-completions API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key. Ollama ignores it but the header must still be present.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Maximum tokens for output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            base_url: None,
            max_tokens: None,
        }
    }
}

impl OpenAiConfig {
    /// Create a new config with the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model: model.into(), ..Default::default() }
    }

    /// Config for gpt-4o-mini, the model the pipeline defaults to.
    pub fn gpt4o_mini(api_key: impl Into<String>) -> Self {
        Self::new(api_key, "gpt-4o-mini")
    }

    /// Config for a local Ollama server, keyless.
    pub fn ollama(model: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            api_key: "ollama".to_string(),
            model: model.into(),
            base_url: Some(base_url.unwrap_or_else(|| OLLAMA_API_BASE.to_string())),
            max_tokens: None,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set max tokens for output.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Get the effective base URL.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_API_BASE)
    }
}
