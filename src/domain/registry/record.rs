// src/domain/registry/record.rs
use crate::domain::revision::SubjectType;
use serde_json::{Map, Value};

/// A row loaded from the host application's store, kept schemaless.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub type_name: SubjectType,
    pub id: String,
    pub attributes: Map<String, Value>,
}

impl Record {
    pub fn new(type_name: SubjectType, id: impl Into<String>, attributes: Map<String, Value>) -> Self {
        Self {
            type_name,
            id: id.into(),
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Attribute in its stored textual form, `None` when absent or null.
    pub fn attribute_string(&self, name: &str) -> Option<String> {
        self.attribute(name).and_then(stored_value)
    }
}

/// Textual form used for revision values: bools become `1`/`0`, strings are
/// kept as-is and composite values are stored as JSON.
pub fn stored_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(if *flag { "1" } else { "0" }.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
