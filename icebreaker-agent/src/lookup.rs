//! Profile URL lookup agent.
//!
//! The reasoning loop is an explicit bounded state machine rather than an
//! opaque framework loop: every model reply is parsed into a `LookupState`,
//! and only a `ToolCall` directive continues the loop. The model plans, the
//! machine drives.

use icebreaker_core::{
    Content, GenerateContentConfig, IcebreakerError, Llm, LlmRequest, LlmResponse, Result, Tool,
    tool_declaration,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Step cap for the reasoning loop. Exhausting it is a lookup failure,
/// reported as an empty URL.
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Where the state machine stands after classifying one model reply.
#[derive(Debug, Clone, PartialEq)]
enum LookupState {
    Reasoning,
    ToolCall { name: String, args: Value, id: Option<String> },
    FinalAnswer(String),
    Failed(String),
}

pub struct LookupAgent {
    model: Arc<dyn Llm>,
    tools: Vec<Arc<dyn Tool>>,
    max_steps: usize,
}

pub struct LookupAgentBuilder {
    model: Option<Arc<dyn Llm>>,
    tools: Vec<Arc<dyn Tool>>,
    max_steps: usize,
}

impl LookupAgentBuilder {
    pub fn new() -> Self {
        Self { model: None, tools: Vec::new(), max_steps: DEFAULT_MAX_STEPS }
    }

    pub fn model(mut self, model: Arc<dyn Llm>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn build(self) -> Result<LookupAgent> {
        let model = self
            .model
            .ok_or_else(|| IcebreakerError::Agent("Model is required".to_string()))?;

        if self.tools.is_empty() {
            return Err(IcebreakerError::Agent(
                "At least one tool is required".to_string(),
            ));
        }

        Ok(LookupAgent { model, tools: self.tools, max_steps: self.max_steps })
    }
}

impl Default for LookupAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupAgent {
    pub fn builder() -> LookupAgentBuilder {
        LookupAgentBuilder::new()
    }

    fn instruction(name: &str) -> String {
        format!(
            "Given the full name \"{name}\", I want you to get back their LinkedIn profile URL. \
             Use the available search tool to find it. \
             Your final answer must contain ONLY the URL. \
             If you cannot find it, answer with an empty string."
        )
    }

    /// Resolve a name to a best-effort profile URL.
    ///
    /// Lookup failures - the model giving up, an empty reply, the step cap -
    /// come back as `Ok("")`. Only transport-level model errors are `Err`.
    pub async fn run(&self, name: &str) -> Result<String> {
        let declarations: HashMap<String, Value> = self
            .tools
            .iter()
            .map(|t| (t.name().to_string(), tool_declaration(t.as_ref())))
            .collect();

        let mut contents = vec![Content::new("user").with_text(Self::instruction(name))];
        let mut state = LookupState::Reasoning;
        let mut steps = 0;

        loop {
            state = match state {
                LookupState::Reasoning => {
                    if steps == self.max_steps {
                        tracing::warn!(max_steps = self.max_steps, "lookup step cap exhausted");
                        return Ok(String::new());
                    }
                    steps += 1;

                    let request = LlmRequest::new(self.model.name(), contents.clone())
                        .with_tools(declarations.clone())
                        .with_config(GenerateContentConfig {
                            temperature: Some(0.0),
                            ..Default::default()
                        });

                    let response = self.model.generate_content(request).await?;
                    let next = Self::classify(&response);

                    // The model's own tool-call turn stays in the transcript.
                    if matches!(next, LookupState::ToolCall { .. }) {
                        if let Some(content) = response.content {
                            contents.push(content);
                        }
                    }
                    next
                }
                LookupState::ToolCall { name, args, id } => {
                    tracing::debug!(step = steps, tool = %name, "lookup agent requested a tool call");

                    let result = self.execute_tool(&name, args).await;
                    contents.push(
                        Content::new("function").with_function_response(name, result, id),
                    );
                    LookupState::Reasoning
                }
                LookupState::FinalAnswer(url) => {
                    tracing::info!(step = steps, url = %url, "lookup agent produced a final answer");
                    return Ok(url);
                }
                LookupState::Failed(reason) => {
                    tracing::warn!(step = steps, reason = %reason, "lookup failed, returning empty URL");
                    return Ok(String::new());
                }
            };
        }
    }

    /// Parse one model reply into a state-machine directive.
    fn classify(response: &LlmResponse) -> LookupState {
        let Some(content) = &response.content else {
            return LookupState::Failed("model returned no content".to_string());
        };

        if let Some((name, args, id)) = content.function_call() {
            return LookupState::ToolCall {
                name: name.to_string(),
                args: args.clone(),
                id: id.map(str::to_string),
            };
        }

        let text = content.text();
        if text.trim().is_empty() {
            return LookupState::Failed("model returned an empty reply".to_string());
        }

        LookupState::FinalAnswer(extract_url(&text))
    }

    async fn execute_tool(&self, name: &str, args: Value) -> Value {
        let Some(tool) = self.tools.iter().find(|t| t.name() == name) else {
            return serde_json::json!({ "error": format!("Tool {name} not found") });
        };

        match tool.execute(args).await {
            Ok(result) => result,
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        }
    }
}

/// Pull the first http(s) URL out of a final-answer text, trimming trailing
/// punctuation the model tends to append. No URL means "not found".
fn extract_url(text: &str) -> String {
    let Some(start) = text.find("http://").or_else(|| text.find("https://")) else {
        return String::new();
    };

    let candidate = &text[start..];
    let end = candidate
        .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '`' | ')' | ']' | '>' | ','))
        .unwrap_or(candidate.len());

    candidate[..end].trim_end_matches(['.', ';']).to_string()
}
