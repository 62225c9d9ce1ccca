use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A capability the lookup agent can invoke while reasoning. Tools are
/// stateless: arguments in, JSON out.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    fn parameters_schema(&self) -> Option<Value> {
        None
    }

    async fn execute(&self, args: Value) -> Result<Value>;
}

/// Build the provider-facing function declaration for a tool.
pub fn tool_declaration(tool: &dyn Tool) -> Value {
    let mut decl = serde_json::json!({
        "name": tool.name(),
        "description": tool.description(),
    });

    if let Some(params) = tool.parameters_schema() {
        decl["parameters"] = params;
    }

    decl
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestTool;

    #[async_trait]
    impl Tool for TestTool {
        fn name(&self) -> &str {
            "test_tool"
        }

        fn description(&self) -> &str {
            "a tool for tests"
        }

        fn parameters_schema(&self) -> Option<Value> {
            Some(serde_json::json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string" }
                },
                "required": ["name"]
            }))
        }

        async fn execute(&self, args: Value) -> Result<Value> {
            Ok(serde_json::json!({ "echo": args }))
        }
    }

    #[test]
    fn test_tool_declaration() {
        let decl = tool_declaration(&TestTool);
        assert_eq!(decl["name"], "test_tool");
        assert_eq!(decl["description"], "a tool for tests");
        assert_eq!(decl["parameters"]["type"], "object");
    }

    #[tokio::test]
    async fn test_tool_execute() {
        let result = TestTool.execute(serde_json::json!({"name": "Eden"})).await.unwrap();
        assert_eq!(result["echo"]["name"], "Eden");
    }
}
