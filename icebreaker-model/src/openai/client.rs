//! OpenAI-compatible client implementation.

use super::config::OpenAiConfig;
use super::convert::{
    self, ChatCompletionRequest, ChatCompletionResponse, JsonSchemaFormat, ResponseFormat,
};
use async_trait::async_trait;
use icebreaker_core::{IcebreakerError, Llm, LlmRequest, LlmResponse};
use reqwest::Client;

/// Client for any OpenAI-compatible chat-completions API.
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a new client.
    pub fn new(config: OpenAiConfig) -> Result<Self, IcebreakerError> {
        let client = Client::builder()
            .build()
            .map_err(|e| IcebreakerError::Model(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for chat completions.
    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.effective_base_url().trim_end_matches('/'))
    }

    /// Build a chat completion request from an LLM request.
    fn build_request(&self, request: &LlmRequest) -> ChatCompletionRequest {
        let messages: Vec<_> = request.contents.iter().map(convert::content_to_message).collect();

        let tools = if request.tools.is_empty() {
            None
        } else {
            Some(convert::convert_tools(&request.tools))
        };

        let temperature = request.config.as_ref().and_then(|c| c.temperature);
        let top_p = request.config.as_ref().and_then(|c| c.top_p);
        let max_tokens = request
            .config
            .as_ref()
            .and_then(|c| c.max_output_tokens)
            .map(|t| t as u32)
            .or(self.config.max_tokens);

        let response_format =
            request.config.as_ref().and_then(|c| c.response_schema.as_ref()).map(|schema| {
                let mut schema_with_strict = schema.clone();
                if let Some(obj) = schema_with_strict.as_object_mut() {
                    obj.insert("additionalProperties".to_string(), serde_json::json!(false));
                }
                ResponseFormat {
                    format_type: "json_schema".to_string(),
                    json_schema: JsonSchemaFormat {
                        name: request.model.replace(['-', '.', '/', ':'], "_"),
                        schema: schema_with_strict,
                        strict: true,
                    },
                }
            });

        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature,
            top_p,
            max_tokens,
            tools,
            response_format,
        }
    }
}

#[async_trait]
impl Llm for OpenAiClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate_content(&self, request: LlmRequest) -> Result<LlmResponse, IcebreakerError> {
        let chat_request = self.build_request(&request);
        tracing::debug!(
            model = %self.config.model,
            messages = chat_request.messages.len(),
            tools = chat_request.tools.as_ref().map_or(0, Vec::len),
            "chat completion request"
        );

        let response = self
            .client
            .post(self.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| IcebreakerError::Model(format!("API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(IcebreakerError::Model(format!(
                "API error ({status}): {error_text}"
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| IcebreakerError::Model(format!("Failed to read response: {e}")))?;

        let chat_response: ChatCompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                IcebreakerError::Model(format!("Failed to parse response: {e} - {response_text}"))
            })?;

        Ok(convert::from_response(&chat_response))
    }
}
