use crate::{Result, types::Content};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A language-model backend. One request, one blocking round trip, one
/// response — the pipeline has no streaming surface, so providers collapse
/// their output into a single [`LlmResponse`].
#[async_trait]
pub trait Llm: Send + Sync {
    fn name(&self) -> &str;
    async fn generate_content(&self, req: LlmRequest) -> Result<LlmResponse>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub model: String,
    pub contents: Vec<Content>,
    pub config: Option<GenerateContentConfig>,
    /// Tool declarations keyed by tool name, in the provider's function format.
    #[serde(skip)]
    pub tools: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: Option<Content>,
    pub usage_metadata: Option<UsageMetadata>,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub prompt_token_count: i32,
    pub candidates_token_count: i32,
    pub total_token_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, contents: Vec<Content>) -> Self {
        Self { model: model.into(), contents, config: None, tools: HashMap::new() }
    }

    /// Set the response schema for structured output.
    pub fn with_response_schema(mut self, schema: serde_json::Value) -> Self {
        let config = self.config.get_or_insert_with(GenerateContentConfig::default);
        config.response_schema = Some(schema);
        self
    }

    /// Set the generation config.
    pub fn with_config(mut self, config: GenerateContentConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_tools(mut self, tools: HashMap<String, serde_json::Value>) -> Self {
        self.tools = tools;
        self
    }
}

impl LlmResponse {
    pub fn new(content: Content) -> Self {
        Self {
            content: Some(content),
            usage_metadata: None,
            finish_reason: Some(FinishReason::Stop),
        }
    }

    /// Concatenated text of the response content, empty if there is none.
    pub fn text(&self) -> String {
        self.content.as_ref().map(Content::text).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_request_creation() {
        let req = LlmRequest::new("gpt-4o-mini", vec![]);
        assert_eq!(req.model, "gpt-4o-mini");
        assert!(req.contents.is_empty());
        assert!(req.tools.is_empty());
    }

    #[test]
    fn test_llm_request_with_response_schema() {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "summary": { "type": "string" }
            }
        });
        let req = LlmRequest::new("gpt-4o-mini", vec![]).with_response_schema(schema.clone());

        let config = req.config.expect("schema implies config");
        assert_eq!(config.response_schema, Some(schema));
    }

    #[test]
    fn test_llm_request_with_config() {
        let config = GenerateContentConfig {
            temperature: Some(0.0),
            top_p: None,
            max_output_tokens: Some(1024),
            response_schema: None,
        };
        let req = LlmRequest::new("gpt-4o-mini", vec![]).with_config(config);

        let config = req.config.unwrap();
        assert_eq!(config.temperature, Some(0.0));
        assert_eq!(config.max_output_tokens, Some(1024));
    }

    #[test]
    fn test_llm_response_creation() {
        let resp = LlmResponse::new(Content::new("model").with_text("hello"));
        assert_eq!(resp.text(), "hello");
        assert_eq!(resp.finish_reason, Some(FinishReason::Stop));
    }

    #[test]
    fn test_llm_response_empty_text() {
        let resp = LlmResponse::default();
        assert_eq!(resp.text(), "");
    }
}
