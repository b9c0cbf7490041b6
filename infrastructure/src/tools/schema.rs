//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing provider-neutral
//! JSON Schema for tool-calling runtimes.

use scout_application::ports::tool_schema::ToolSchemaPort;
use scout_domain::tool::entities::{ToolDefinition, ToolSpec};
use serde_json::{Map, Value, json};

/// Default implementation producing provider-neutral JSON Schema.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"integer"` → `"integer"`
/// - `"number"` → `"number"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
///
/// Numeric parameters carry their `minimum` when the definition sets one.
///
/// Unknown arguments are rejected by the executor, so every schema sets
/// `additionalProperties: false`.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let mut prop = Map::new();
            match param.param_type.as_str() {
                "integer" => {
                    prop.insert("type".to_string(), json!("integer"));
                }
                "number" => {
                    prop.insert("type".to_string(), json!("number"));
                }
                "boolean" => {
                    prop.insert("type".to_string(), json!("boolean"));
                }
                _ => {
                    prop.insert("type".to_string(), json!("string"));
                }
            }
            if let Some(minimum) = param.minimum {
                prop.insert("minimum".to_string(), json!(minimum));
            }
            prop.insert("description".to_string(), json!(param.description));
            properties.insert(param.name.clone(), Value::Object(prop));

            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<Value> {
        let mut tools: Vec<&ToolDefinition> = spec.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::support_tool_spec;
    use scout_application::RetrievalConfig;
    use scout_domain::tool::entities::ToolParameter;

    #[test]
    fn test_tool_to_schema() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("get_article_content", "Fetch an article")
            .with_parameter(ToolParameter::new("article_id", "Article URL", true))
            .with_parameter(
                ToolParameter::new("max_chars", "Max characters", false)
                    .with_type("integer")
                    .with_minimum(0),
            );

        let schema = converter.tool_to_schema(&tool);

        assert_eq!(schema["name"], "get_article_content");
        assert_eq!(schema["input_schema"]["type"], "object");
        assert_eq!(schema["input_schema"]["additionalProperties"], false);

        let id_prop = &schema["input_schema"]["properties"]["article_id"];
        assert_eq!(id_prop["type"], "string");
        assert_eq!(id_prop["description"], "Article URL");

        let chars_prop = &schema["input_schema"]["properties"]["max_chars"];
        assert_eq!(chars_prop["type"], "integer");
        assert_eq!(chars_prop["minimum"], 0);
        assert!(id_prop.get("minimum").is_none());

        let required = schema["input_schema"]["required"].as_array().unwrap();
        assert_eq!(required, &vec![json!("article_id")]);
    }

    #[test]
    fn test_all_tools_schema_for_support_tools() {
        let converter = JsonSchemaToolConverter;
        let tools = converter.all_tools_schema(&support_tool_spec(&RetrievalConfig::default()));

        // Aliases are not separate tools; results are sorted by name
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "get_article_content");
        assert_eq!(tools[1]["name"], "search_support_articles");
        assert_eq!(tools[1]["input_schema"]["required"], json!(["query"]));

        let fetch_props = &tools[0]["input_schema"]["properties"];
        assert_eq!(fetch_props["max_chars"]["minimum"], 0);
        let search_props = &tools[1]["input_schema"]["properties"];
        assert_eq!(search_props["max_results"]["minimum"], 1);
    }
}
