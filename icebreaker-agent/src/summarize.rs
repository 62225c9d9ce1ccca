//! Summary generation over gathered profile information.

use icebreaker_core::{
    Content, GenerateContentConfig, IcebreakerError, Llm, LlmRequest, Result,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

/// Structured output of a summarization round: the short biography plus the
/// conversation-starter facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Summary {
    pub summary: String,
    pub facts: Vec<String>,
}

/// JSON schema the model is asked to conform to.
pub fn summary_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "A short summary of the person, 2-3 sentences."
            },
            "facts": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Two interesting facts about the person."
            }
        },
        "required": ["summary", "facts"]
    })
}

pub struct SummaryGenerator {
    model: Arc<dyn Llm>,
}

impl SummaryGenerator {
    pub fn new(model: Arc<dyn Llm>) -> Self {
        Self { model }
    }

    fn prompt(information: &str) -> String {
        format!(
            "Given the information {information} about a person, create:\n\
             1. A short summary, 2-3 sentences long.\n\
             2. Two interesting facts about them.\n\
             Respond with a JSON object with a \"summary\" string field and a \
             \"facts\" array of strings."
        )
    }

    /// One summarization round trip: prompt with the gathered information and
    /// parse the structured reply.
    pub async fn generate(&self, information: &str) -> Result<Summary> {
        let contents = vec![Content::new("user").with_text(Self::prompt(information))];

        let request = LlmRequest::new(self.model.name(), contents)
            .with_config(GenerateContentConfig {
                temperature: Some(0.0),
                ..Default::default()
            })
            .with_response_schema(summary_schema());

        let response = self.model.generate_content(request).await?;
        parse_summary(&response.text())
    }
}

/// Parse the model's reply into a [`Summary`], tolerating markdown code
/// fences but nothing else.
pub fn parse_summary(raw: &str) -> Result<Summary> {
    let body = strip_code_fences(raw);
    if body.is_empty() {
        return Err(IcebreakerError::Parse(
            "model returned an empty summary reply".to_string(),
        ));
    }

    let summary: Summary = serde_json::from_str(body)
        .map_err(|e| IcebreakerError::Parse(format!("malformed summary JSON: {e}")))?;

    if summary.summary.trim().is_empty() {
        return Err(IcebreakerError::Parse("summary text is empty".to_string()));
    }
    if summary.facts.is_empty() {
        return Err(IcebreakerError::Parse("summary has no facts".to_string()));
    }

    Ok(summary)
}

/// Remove a surrounding ```json ... ``` fence, if present.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
