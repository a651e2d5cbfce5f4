//! Common utilities shared across tool definitions.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, de::DeserializeOwned};

use crate::domains::tools::ToolError;

// Input for tools that take no arguments; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Deserialize raw call arguments into a tool's parameter struct.
pub fn parse_params<P: DeserializeOwned>(args: Option<JsonObject>) -> Result<P, ToolError> {
    let args = args.unwrap_or_default();
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Build the Tool model advertised to clients.
pub fn tool_model<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Extract the text of the first content item, if it is text.
#[cfg(test)]
pub fn first_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
