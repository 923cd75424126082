//! JSON schemas for OpenAI structured outputs.
//!
//! Strict mode wants `additionalProperties: false` and every property listed
//! in `required` on each object schema. `schemars` emits neither.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Types the generator can ask OpenAI to fill in.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Strict-mode schema for this type.
    fn openai_schema() -> Value {
        let mut value = serde_json::to_value(schema_for!(Self)).unwrap_or_default();
        make_strict(&mut value);

        if let Value::Object(map) = &mut value {
            map.remove("$schema");
            map.remove("title");
        }
        value
    }

    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

fn make_strict(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.get("type").and_then(Value::as_str) == Some("object") {
                map.insert("additionalProperties".into(), Value::Bool(false));

                let keys: Option<Vec<Value>> = map
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|props| props.keys().cloned().map(Value::String).collect());
                if let Some(keys) = keys {
                    map.insert("required".into(), Value::Array(keys));
                }
            }
            for child in map.values_mut() {
                make_strict(child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(make_strict),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::generation::{GeneratedPost, PhotoSuggestions};

    #[test]
    fn generated_post_schema_is_strict() {
        let schema = GeneratedPost::openai_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["additionalProperties"], false);
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
        assert!(schema.get("$schema").is_none());
        assert_eq!(schema["properties"]["tags"]["type"], "array");
    }

    #[test]
    fn photo_schema_uses_wire_names() {
        let schema = PhotoSuggestions::openai_schema();

        assert!(schema["properties"].get("suggestedTopics").is_some());
        assert!(schema["properties"].get("contentIdeas").is_some());
        assert_eq!(PhotoSuggestions::type_name(), "PhotoSuggestions");
    }
}
