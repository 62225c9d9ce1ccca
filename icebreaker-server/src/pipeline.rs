use crate::config::{AppConfig, ModelProvider};
use icebreaker_agent::{LookupAgent, SummaryGenerator, Summary};
use icebreaker_core::{IcebreakerError, Llm, Result};
use icebreaker_model::{OpenAiClient, OpenAiConfig};
use icebreaker_profile::{MOCK_PROFILE_URL, ProfileFetcher, ScrapinConfig};
use icebreaker_tool::{TavilyClient, TavilyConfig, TavilySearchTool};
use std::sync::Arc;

/// Everything the UI needs to render one icebreak.
#[derive(Debug, Clone, PartialEq)]
pub struct IceBreak {
    pub summary: Summary,
    pub photo_url: Option<String>,
}

/// The end-to-end flow: resolve the name to a profile URL, scrape the
/// profile, summarize it. In mock mode lookup is skipped outright since the
/// fetcher ignores the URL anyway.
pub struct Pipeline {
    lookup: Option<LookupAgent>,
    fetcher: ProfileFetcher,
    generator: SummaryGenerator,
}

impl Pipeline {
    pub fn new(
        lookup: Option<LookupAgent>,
        fetcher: ProfileFetcher,
        generator: SummaryGenerator,
    ) -> Self {
        Self { lookup, fetcher, generator }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let model: Arc<dyn Llm> = Arc::new(OpenAiClient::new(Self::model_config(config)?)?);

        let lookup = if config.is_mock() {
            None
        } else {
            let tavily_key = config.tavily_api_key.clone().ok_or_else(|| {
                IcebreakerError::Config("TAVILY_API_KEY is required for live lookup".to_string())
            })?;
            let tavily = Arc::new(TavilyClient::new(TavilyConfig::new(tavily_key))?);

            Some(
                LookupAgent::builder()
                    .model(model.clone())
                    .tool(Arc::new(TavilySearchTool::new(tavily)))
                    .build()?,
            )
        };

        let fetcher = match &config.scrapin_api_key {
            Some(key) => ProfileFetcher::live(ScrapinConfig::new(key.clone()))?,
            None => {
                let url = config
                    .mock_profile_url
                    .clone()
                    .unwrap_or_else(|| MOCK_PROFILE_URL.to_string());
                ProfileFetcher::mock(url)?
            }
        };

        Ok(Self::new(lookup, fetcher, SummaryGenerator::new(model)))
    }

    fn model_config(config: &AppConfig) -> Result<OpenAiConfig> {
        match config.provider {
            ModelProvider::OpenAi => {
                let api_key = config.openai_api_key.clone().ok_or_else(|| {
                    IcebreakerError::Config("OPENAI_API_KEY is not set".to_string())
                })?;

                let mut model_config = match &config.openai_model {
                    Some(model) => OpenAiConfig::new(api_key, model.clone()),
                    None => OpenAiConfig::gpt4o_mini(api_key),
                };
                if let Some(base_url) = &config.openai_base_url {
                    model_config = model_config.with_base_url(base_url.clone());
                }
                Ok(model_config)
            }
            ModelProvider::Ollama => {
                let model = config
                    .ollama_model
                    .clone()
                    .unwrap_or_else(|| "llama3.3:latest".to_string());
                Ok(OpenAiConfig::ollama(model, config.ollama_base_url.clone()))
            }
        }
    }

    /// Run the full pipeline for one person.
    pub async fn break_ice(&self, name: &str) -> Result<IceBreak> {
        let profile_url = match &self.lookup {
            Some(agent) => {
                let url = agent.run(name).await?;
                if url.is_empty() {
                    return Err(IcebreakerError::Agent(format!(
                        "could not find a LinkedIn profile for '{name}'"
                    )));
                }
                url
            }
            None => String::new(),
        };

        let record = self.fetcher.fetch(&profile_url).await?;
        tracing::debug!(
            name = %name,
            profile_name = record.full_name().as_deref().unwrap_or("unknown"),
            "profile fetched"
        );

        let summary = self.generator.generate(&record.to_prompt_text()).await?;
        let photo_url = record.photo_url().map(str::to_string);

        Ok(IceBreak { summary, photo_url })
    }
}
