//! Tavily web-search client and its agent-facing tool.

use async_trait::async_trait;
use icebreaker_core::{IcebreakerError, Result, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Default Tavily API base URL.
pub const TAVILY_API_BASE: &str = "https://api.tavily.com";

/// Configuration for the Tavily search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TavilyConfig {
    /// Tavily API key.
    pub api_key: String,
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Results per query. One keeps the agent's context focused.
    pub max_results: u32,
}

impl TavilyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: None, max_results: 1 }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(TAVILY_API_BASE)
    }
}

#[derive(Debug, Clone, Serialize)]
struct SearchRequest {
    query: String,
    max_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// One search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: f64,
}

/// Client for the Tavily search API.
pub struct TavilyClient {
    client: reqwest::Client,
    config: TavilyConfig,
}

impl TavilyClient {
    pub fn new(config: TavilyConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| IcebreakerError::Tool(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!("{}/search", self.config.effective_base_url().trim_end_matches('/'))
    }

    /// Run one search query. A single outbound call, no retries.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let request =
            SearchRequest { query: query.to_string(), max_results: self.config.max_results };

        let response = self
            .client
            .post(self.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| IcebreakerError::Tool(format!("Tavily request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(IcebreakerError::Tool(format!(
                "Tavily API error ({status}): {error_text}"
            )));
        }

        let search_response: SearchResponse = response
            .json()
            .await
            .map_err(|e| IcebreakerError::Tool(format!("Failed to parse Tavily response: {e}")))?;

        Ok(search_response.results)
    }
}

/// Searches the web for a person's LinkedIn profile URL.
///
/// Provider errors and empty result sets both come back as an empty results
/// list: the lookup agent must tolerate "nothing found" without failing.
pub struct TavilySearchTool {
    client: Arc<TavilyClient>,
}

impl TavilySearchTool {
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilySearchTool {
    fn name(&self) -> &str {
        "linkedin_profile_search"
    }

    fn description(&self) -> &str {
        "Useful when you need to find a LinkedIn profile URL from a person's name."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The person's full name."
                }
            },
            "required": ["name"]
        }))
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let name = args
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| IcebreakerError::Tool("missing required argument: name".to_string()))?;

        let query = format!("{name} LinkedIn profile");

        let results = match self.client.search(&query).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "search failed, returning no candidates");
                Vec::new()
            }
        };

        Ok(serde_json::json!({ "results": results }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server_uri: &str) -> Arc<TavilyClient> {
        Arc::new(
            TavilyClient::new(TavilyConfig::new("tvly-test").with_base_url(server_uri)).unwrap(),
        )
    }

    #[tokio::test]
    async fn search_returns_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("Authorization", "Bearer tvly-test"))
            .and(body_partial_json(json!({"query": "Eden Marco LinkedIn profile"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "title": "Eden Marco - LinkedIn",
                    "url": "https://www.linkedin.com/in/eden-marco/",
                    "content": "Eden Marco. LLM Specialist at Google.",
                    "score": 0.98
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let results = client.search("Eden Marco LinkedIn profile").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://www.linkedin.com/in/eden-marco/");
    }

    #[tokio::test]
    async fn search_surfaces_provider_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.search("anything").await.unwrap_err();
        assert!(matches!(err, IcebreakerError::Tool(_)));
    }

    #[tokio::test]
    async fn tool_builds_the_linkedin_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({"query": "Eden Marco LinkedIn profile"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = TavilySearchTool::new(test_client(&server.uri()));
        let result = tool.execute(json!({"name": "Eden Marco"})).await.unwrap();
        assert_eq!(result["results"], json!([]));
    }

    #[tokio::test]
    async fn tool_swallows_provider_errors_as_empty_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let tool = TavilySearchTool::new(test_client(&server.uri()));
        let result = tool.execute(json!({"name": "Nobody"})).await.unwrap();
        assert_eq!(result["results"], json!([]));
    }

    #[tokio::test]
    async fn tool_rejects_missing_name() {
        let server = MockServer::start().await;
        let tool = TavilySearchTool::new(test_client(&server.uri()));
        let err = tool.execute(json!({})).await.unwrap_err();
        assert!(matches!(err, IcebreakerError::Tool(_)));
    }

    #[test]
    fn tool_declares_its_parameters() {
        let config = TavilyConfig::new("tvly-test");
        let tool = TavilySearchTool::new(Arc::new(TavilyClient::new(config).unwrap()));
        let schema = tool.parameters_schema().unwrap();
        assert_eq!(schema["required"][0], "name");
    }
}
