//! Agent specification model
//!
//! A specification is a schemaless JSON object assembled by one of the
//! shells (wizard answers, web form fields) and consumed once by the
//! engine. Accessors are total: a missing or wrongly-typed key reads as
//! absent, never as an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User-supplied description of the agent to generate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentSpec(Map<String, Value>);

impl AgentSpec {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap an existing JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Raw access to a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Agent name, when present.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// Target language for generated code. Defaults to python.
    pub fn language(&self) -> &str {
        self.get("language").and_then(Value::as_str).unwrap_or("python")
    }

    /// Explicit framework request, when present and a string.
    ///
    /// A non-string value under `framework` reads as no override at all.
    pub fn framework_override(&self) -> Option<&str> {
        self.get("framework").and_then(Value::as_str)
    }

    /// Declared capability strings. Non-string entries are skipped.
    pub fn capabilities(&self) -> Vec<&str> {
        self.get("capabilities")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Raw length of the `capabilities` array, counting entries of any type.
    pub fn capability_count(&self) -> usize {
        self.get("capabilities").and_then(Value::as_array).map_or(0, Vec::len)
    }

    /// Free-text use case. Empty when absent.
    pub fn use_case(&self) -> &str {
        self.get("use_case").and_then(Value::as_str).unwrap_or("")
    }

    /// Model choice riding in the specification, when present.
    pub fn model(&self) -> Option<&str> {
        self.get("model").and_then(Value::as_str)
    }

    /// Whether the user attached custom requirements of any shape.
    pub fn has_custom_requirements(&self) -> bool {
        self.contains_key("custom_requirements")
    }

    /// Flatten the specification into indented text for prompts and docs.
    ///
    /// Top-level maps render as `key:` followed by two-space-indented
    /// `subkey: subvalue` lines, lists as `- item` lines, and everything
    /// else as a single `key: value` line. String values render bare,
    /// other scalars in their JSON form.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.0 {
            match value {
                Value::Object(map) => {
                    out.push_str(key);
                    out.push_str(":\n");
                    for (sub_key, sub_value) in map {
                        out.push_str(&format!("  {}: {}\n", sub_key, render_scalar(sub_value)));
                    }
                }
                Value::Array(items) => {
                    out.push_str(key);
                    out.push_str(":\n");
                    for item in items {
                        out.push_str(&format!("  - {}\n", render_scalar(item)));
                    }
                }
                other => {
                    out.push_str(&format!("{}: {}\n", key, render_scalar(other)));
                }
            }
        }
        out
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec_from(value: Value) -> AgentSpec {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_on_empty_spec() {
        let spec = AgentSpec::new();
        assert_eq!(spec.language(), "python");
        assert_eq!(spec.use_case(), "");
        assert!(spec.capabilities().is_empty());
        assert_eq!(spec.framework_override(), None);
        assert_eq!(spec.model(), None);
        assert!(!spec.has_custom_requirements());
    }

    #[test]
    fn test_non_string_framework_reads_as_absent() {
        let spec = spec_from(json!({ "framework": 42 }));
        assert_eq!(spec.framework_override(), None);
    }

    #[test]
    fn test_capabilities_skip_non_strings() {
        let spec = spec_from(json!({ "capabilities": ["rag", 7, "memory"] }));
        assert_eq!(spec.capabilities(), vec!["rag", "memory"]);
        assert_eq!(spec.capability_count(), 3);
    }

    #[test]
    fn test_render_scalar_list_and_map() {
        let spec = spec_from(json!({
            "api_keys": { "openai": "sk-123" },
            "capabilities": ["rag", "memory"],
            "name": "helper",
            "retries": 3,
        }));
        let rendered = spec.render();
        // serde_json maps iterate in sorted key order
        assert_eq!(
            rendered,
            "api_keys:\n  openai: sk-123\ncapabilities:\n  - rag\n  - memory\nname: helper\nretries: 3\n"
        );
    }

    #[test]
    fn test_render_empty_spec_is_empty() {
        assert_eq!(AgentSpec::new().render(), "");
    }

    #[test]
    fn test_serde_transparent_round_trip() {
        let spec = spec_from(json!({ "name": "helper", "language": "python" }));
        let encoded = serde_json::to_value(&spec).unwrap();
        assert_eq!(encoded, json!({ "name": "helper", "language": "python" }));
    }
}
