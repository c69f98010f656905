//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that renders each tool as a
//! chat-completions function object: `{"type": "function", "function":
//! {name, description, parameters}}` with a JSON Schema parameter block.

use specscout_application::ports::tool_schema::ToolSchemaPort;
use specscout_domain::ToolDefinition;

/// Default implementation producing chat-completions function schemas.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"`
/// - `"integer"` → `"integer"`
/// - `"number"` → `"number"`
/// - `"boolean"` → `"boolean"`
/// - `"array"` → `"array"`
/// - anything else → `"string"`
///
/// A parameter with allowed values becomes a JSON Schema `enum`.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "integer" => "integer",
                "number" => "number",
                "boolean" => "boolean",
                "array" => "array",
                _ => "string",
            };

            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), serde_json::json!(schema_type));
            prop.insert(
                "description".to_string(),
                serde_json::json!(param.description),
            );
            if !param.allowed_values.is_empty() {
                prop.insert("enum".to_string(), serde_json::json!(param.allowed_values));
            }
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }

    fn all_tools_schema(&self, tools: &[ToolDefinition]) -> Vec<serde_json::Value> {
        let mut tools: Vec<&ToolDefinition> = tools.iter().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specscout_domain::ToolParameter;

    #[test]
    fn test_tool_to_schema() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("search_spec", "Search cached endpoints")
            .with_parameter(ToolParameter::new("query", "Free-text search query", true))
            .with_parameter(
                ToolParameter::new("limit", "Maximum number of results", false)
                    .with_type("integer"),
            );

        let schema = converter.tool_to_schema(&tool);

        assert_eq!(schema["type"], "function");
        assert_eq!(schema["function"]["name"], "search_spec");
        assert_eq!(schema["function"]["description"], "Search cached endpoints");
        assert_eq!(schema["function"]["parameters"]["type"], "object");

        let query_prop = &schema["function"]["parameters"]["properties"]["query"];
        assert_eq!(query_prop["type"], "string");
        assert_eq!(query_prop["description"], "Free-text search query");

        let limit_prop = &schema["function"]["parameters"]["properties"]["limit"];
        assert_eq!(limit_prop["type"], "integer");

        let required = schema["function"]["parameters"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "query");
    }

    #[test]
    fn test_allowed_values_become_enum() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("search_spec", "Search cached endpoints").with_parameter(
            ToolParameter::new("method", "HTTP method filter", false)
                .with_allowed_values(["GET", "POST", "all"]),
        );

        let schema = converter.tool_to_schema(&tool);
        let method_prop = &schema["function"]["parameters"]["properties"]["method"];
        assert_eq!(
            method_prop["enum"],
            serde_json::json!(["GET", "POST", "all"])
        );
    }

    #[test]
    fn test_all_tools_schema_is_sorted() {
        let converter = JsonSchemaToolConverter;
        let tools = vec![
            ToolDefinition::new("search_spec", "Search")
                .with_parameter(ToolParameter::new("query", "Query", true)),
            ToolDefinition::new("load_spec", "Load"),
        ];

        let schemas = converter.all_tools_schema(&tools);
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[0]["function"]["name"], "load_spec");
        assert_eq!(schemas[1]["function"]["name"], "search_spec");

        for schema in &schemas {
            assert!(schema["function"]["name"].is_string());
            assert!(schema["function"]["description"].is_string());
            assert_eq!(
                schema["function"]["parameters"]["type"].as_str(),
                Some("object")
            );
        }
    }

    #[test]
    fn test_tool_without_parameters_has_empty_schema() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("list_loaded_providers", "List providers");

        let schema = converter.tool_to_schema(&tool);
        let parameters = &schema["function"]["parameters"];
        assert!(parameters["properties"].as_object().unwrap().is_empty());
        assert!(parameters["required"].as_array().unwrap().is_empty());
    }
}
