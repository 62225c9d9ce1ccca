use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponseData {
    pub name: String,
    pub response: serde_json::Value,
}

/// One turn of a model conversation: a role plus the parts that make it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    FunctionCall {
        name: String,
        args: serde_json::Value,
        /// Tool call ID assigned by OpenAI-style providers.
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    FunctionResponse {
        function_response: FunctionResponseData,
        /// Tool call ID this response answers, for OpenAI-style providers.
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
}

impl Content {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into(), parts: Vec::new() }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text { text: text.into() });
        self
    }

    pub fn with_function_response(
        mut self,
        name: impl Into<String>,
        response: serde_json::Value,
        id: Option<String>,
    ) -> Self {
        self.parts.push(Part::FunctionResponse {
            function_response: FunctionResponseData { name: name.into(), response },
            id,
        });
        self
    }

    /// Concatenated text of every Text part in this content.
    pub fn text(&self) -> String {
        self.parts.iter().filter_map(Part::text).collect::<Vec<_>>().join("")
    }

    /// The first function call part, if the model asked for a tool.
    pub fn function_call(&self) -> Option<(&str, &serde_json::Value, Option<&str>)> {
        self.parts.iter().find_map(|p| match p {
            Part::FunctionCall { name, args, id } => {
                Some((name.as_str(), args, id.as_deref()))
            }
            _ => None,
        })
    }
}

impl Part {
    /// Returns the text content if this is a Text part, None otherwise.
    pub fn text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn text_part(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn function_call(
        name: impl Into<String>,
        args: serde_json::Value,
        id: Option<String>,
    ) -> Self {
        Part::FunctionCall { name: name.into(), args, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_creation() {
        let content = Content::new("user").with_text("Hello");
        assert_eq!(content.role, "user");
        assert_eq!(content.parts.len(), 1);
        assert_eq!(content.text(), "Hello");
    }

    #[test]
    fn test_content_text_concatenates_parts() {
        let content = Content::new("model").with_text("Eden ").with_text("Marco");
        assert_eq!(content.text(), "Eden Marco");
    }

    #[test]
    fn test_content_function_call_accessor() {
        let content = Content {
            role: "model".to_string(),
            parts: vec![
                Part::text_part("Searching..."),
                Part::function_call(
                    "linkedin_profile_search",
                    json!({"name": "Eden Marco"}),
                    Some("call_0".to_string()),
                ),
            ],
        };

        let (name, args, id) = content.function_call().expect("has a call");
        assert_eq!(name, "linkedin_profile_search");
        assert_eq!(args["name"], "Eden Marco");
        assert_eq!(id, Some("call_0"));
    }

    #[test]
    fn test_content_without_function_call() {
        let content = Content::new("model").with_text("https://linkedin.com/in/edenmarco");
        assert!(content.function_call().is_none());
    }

    #[test]
    fn test_function_response_builder() {
        let content = Content::new("function").with_function_response(
            "linkedin_profile_search",
            json!({"results": []}),
            Some("call_0".to_string()),
        );

        assert!(matches!(
            &content.parts[0],
            Part::FunctionResponse { function_response, .. }
                if function_response.name == "linkedin_profile_search"
        ));
    }

    #[test]
    fn test_part_serialization() {
        let part = Part::text_part("test");
        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("test"));
    }
}
