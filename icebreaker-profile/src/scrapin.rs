use crate::record::ProfileRecord;
use icebreaker_core::{IcebreakerError, Result};
use std::time::Duration;

pub const SCRAPIN_API_BASE: &str = "https://api.scrapin.io";

/// Frozen profile document used when running without a Scrapin key.
pub const MOCK_PROFILE_URL: &str = "https://gist.githubusercontent.com/YFolla/ff1954753eb6354728a292e77ee10795/raw/b177fcc64b7308b8b3a81eddbbb09bf647ed19c6/yfolla_linkedin.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ScrapinConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ScrapinConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: SCRAPIN_API_BASE.to_string() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

enum ProfileSource {
    /// Scrapin enrichment API, keyed per request.
    Live(ScrapinConfig),
    /// A fixed document fetched as-is; the profile URL argument is ignored.
    Mock { url: String },
}

/// Fetches raw profile JSON and hands back the cleaned [`ProfileRecord`].
pub struct ProfileFetcher {
    client: reqwest::Client,
    source: ProfileSource,
}

impl ProfileFetcher {
    pub fn live(config: ScrapinConfig) -> Result<Self> {
        Ok(Self { client: Self::http_client()?, source: ProfileSource::Live(config) })
    }

    pub fn mock(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Self::http_client()?,
            source: ProfileSource::Mock { url: url.into() },
        })
    }

    fn http_client() -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| IcebreakerError::Profile(format!("failed to build HTTP client: {e}")))
    }

    /// Fetch and clean the profile behind `profile_url`. In mock mode the
    /// fixed document is fetched instead and `profile_url` is ignored.
    pub async fn fetch(&self, profile_url: &str) -> Result<ProfileRecord> {
        let request = match &self.source {
            ProfileSource::Live(config) => {
                tracing::debug!(url = %profile_url, "scraping profile via Scrapin");
                self.client
                    .get(format!("{}/enrichment/profile", config.base_url))
                    .query(&[("apikey", config.api_key.as_str()), ("linkedInUrl", profile_url)])
            }
            ProfileSource::Mock { url } => {
                tracing::debug!(url = %url, "fetching mock profile document");
                self.client.get(url)
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| IcebreakerError::Profile(format!("profile request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IcebreakerError::Profile(format!(
                "profile request returned {status}: {body}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| IcebreakerError::Profile(format!("invalid profile JSON: {e}")))?;

        let person = payload
            .get("person")
            .cloned()
            .ok_or_else(|| {
                IcebreakerError::Profile("profile payload has no person object".to_string())
            })?;

        ProfileRecord::from_person(person)
    }
}
