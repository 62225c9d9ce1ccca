use async_trait::async_trait;
use icebreaker_core::{IcebreakerError, Llm, LlmRequest, LlmResponse, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted model for tests: each call pops the next queued response.
pub struct MockLlm {
    name: String,
    responses: Mutex<VecDeque<LlmResponse>>,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), responses: Mutex::new(VecDeque::new()) }
    }

    pub fn with_response(self, response: LlmResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Shorthand for queueing a plain text response.
    pub fn with_text_response(self, text: impl Into<String>) -> Self {
        let content = icebreaker_core::Content::new("model").with_text(text);
        self.with_response(LlmResponse::new(content))
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_content(&self, _req: LlmRequest) -> Result<LlmResponse> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| IcebreakerError::Model("MockLlm response queue is empty".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icebreaker_core::Content;

    #[tokio::test]
    async fn test_mock_llm_pops_responses_in_order() {
        let mock = MockLlm::new("test-llm")
            .with_text_response("first")
            .with_response(LlmResponse::new(Content::new("model").with_text("second")));

        assert_eq!(mock.name(), "test-llm");

        let req = LlmRequest::new("test-llm", vec![]);
        let first = mock.generate_content(req.clone()).await.unwrap();
        assert_eq!(first.text(), "first");

        let second = mock.generate_content(req.clone()).await.unwrap();
        assert_eq!(second.text(), "second");

        let err = mock.generate_content(req).await.unwrap_err();
        assert!(matches!(err, IcebreakerError::Model(_)));
    }
}
