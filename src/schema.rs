//! Response schema sent with every generation call.
//!
//! The schema is derived from [`GenerationResult`] and trimmed down to the
//! OpenAPI subset Gemini accepts as `responseSchema`.

use schemars::schema_for;
use serde_json::{Map, Value};

use crate::models::GenerationResult;

/// Keys Gemini rejects inside `responseSchema`.
const UNSUPPORTED_KEYS: &[&str] = &["$schema", "$id", "title", "definitions", "$defs", "additionalProperties", "default", "examples"];

pub fn response_schema() -> serde_json::Result<Value> {
    let mut root = serde_json::to_value(schema_for!(GenerationResult))?;
    clean_node(&mut root);
    Ok(root)
}

fn clean_node(node: &mut Value) {
    if let Value::Object(map) = node {
        strip_unsupported(map);
        if let Some(Value::Object(props)) = map.get_mut("properties") {
            for prop in props.values_mut() {
                clean_node(prop);
            }
        }
        if let Some(items) = map.get_mut("items") {
            clean_node(items);
        }
    }
}

fn strip_unsupported(map: &mut Map<String, Value>) {
    for key in UNSUPPORTED_KEYS {
        map.remove(*key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn schema_declares_three_required_strings() {
        let schema = response_schema().unwrap();
        assert_eq!(schema["type"], "object");
        for field in ["html", "css", "javascript"] {
            assert_eq!(schema["properties"][field]["type"], "string", "{field}");
        }
        let mut required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        required.sort_unstable();
        assert_eq!(required, vec!["css", "html", "javascript"]);
    }

    #[test]
    fn schema_drops_keys_gemini_rejects() {
        let schema = response_schema().unwrap();
        let map = schema.as_object().unwrap();
        assert!(!map.contains_key("$schema"));
        assert!(!map.contains_key("title"));
    }

    #[test]
    fn field_descriptions_survive_cleaning() {
        let schema = response_schema().unwrap();
        assert_eq!(schema["properties"]["css"]["description"], "The generated CSS code.");
    }
}
