use icebreaker_core::{IcebreakerError, Result};
use std::time::Duration;

/// Which chat-completions backend serves the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProvider {
    OpenAi,
    Ollama,
}

impl ModelProvider {
    fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "ollama" => Ok(Self::Ollama),
            other => Err(IcebreakerError::Config(format!(
                "unknown model provider '{other}' (expected 'openai' or 'ollama')"
            ))),
        }
    }
}

/// Request-surface limits applied as middleware.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Maximum request body size in bytes (default: 64KB, the form is tiny)
    pub max_body_size: usize,
    /// Request timeout (default: 120 seconds, the pipeline makes several
    /// upstream round trips)
    pub request_timeout: Duration,
    /// Whether error pages carry the underlying error message (default: false)
    pub expose_error_details: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024,
            request_timeout: Duration::from_secs(120),
            expose_error_details: false,
        }
    }
}

impl SecurityConfig {
    /// Permissive configuration for local development.
    pub fn development() -> Self {
        Self { expose_error_details: true, ..Self::default() }
    }
}

/// Full service configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub provider: ModelProvider,
    /// Required when the provider is OpenAI.
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
    pub ollama_model: Option<String>,
    pub ollama_base_url: Option<String>,
    pub tavily_api_key: Option<String>,
    /// When unset the service runs in mock-profile mode.
    pub scrapin_api_key: Option<String>,
    pub mock_profile_url: Option<String>,
    pub security: SecurityConfig,
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn flag_enabled(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = env_opt("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match env_opt("PORT") {
            Some(raw) => raw.parse().map_err(|_| {
                IcebreakerError::Config(format!("PORT must be a number, got '{raw}'"))
            })?,
            None => 8080,
        };

        let provider = match env_opt("ICEBREAKER_MODEL_PROVIDER") {
            Some(raw) => ModelProvider::parse(&raw)?,
            None => ModelProvider::OpenAi,
        };

        let security = if env_opt("ICEBREAKER_DEV").as_deref().is_some_and(flag_enabled) {
            SecurityConfig::development()
        } else {
            SecurityConfig::default()
        };

        let config = Self {
            host,
            port,
            provider,
            openai_api_key: env_opt("OPENAI_API_KEY"),
            openai_model: env_opt("OPENAI_MODEL"),
            openai_base_url: env_opt("OPENAI_BASE_URL"),
            ollama_model: env_opt("OLLAMA_MODEL"),
            ollama_base_url: env_opt("OLLAMA_BASE_URL"),
            tavily_api_key: env_opt("TAVILY_API_KEY"),
            scrapin_api_key: env_opt("SCRAPIN_API_KEY"),
            mock_profile_url: env_opt("ICEBREAKER_MOCK_PROFILE_URL"),
            security,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.provider == ModelProvider::OpenAi && self.openai_api_key.is_none() {
            return Err(IcebreakerError::Config(
                "OPENAI_API_KEY is required when the model provider is 'openai'".to_string(),
            ));
        }

        if self.scrapin_api_key.is_some() && self.tavily_api_key.is_none() {
            return Err(IcebreakerError::Config(
                "TAVILY_API_KEY is required for live profile lookup".to_string(),
            ));
        }

        Ok(())
    }

    /// Live mode scrapes real profiles; without a Scrapin key the service
    /// serves a frozen mock profile instead.
    pub fn is_mock(&self) -> bool {
        self.scrapin_api_key.is_none()
    }
}
