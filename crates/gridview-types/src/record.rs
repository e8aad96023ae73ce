use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity instance shown in a list screen.
///
/// Records are shape-agnostic: a unique string `id` plus an open-ended
/// field map. The same type carries renovation requests, quotes, and
/// projects; screens differ only in their `ListConfig`. `id` uniqueness
/// within one input list is a caller invariant and is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier within one record set
    pub id: String,

    /// All remaining fields, serialized flat alongside `id`
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw field lookup. Does not resolve `"id"`; use [`Record::text`]
    /// for the accessor-facing view.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Textual form of a field, as used by search, filtering, and sorting.
    ///
    /// `"id"` resolves to the record id. Scalars coerce via [`value_text`];
    /// missing fields, nulls, and nested values yield `None`.
    pub fn text(&self, name: &str) -> Option<String> {
        if name == "id" {
            return Some(self.id.clone());
        }
        self.fields.get(name).and_then(value_text)
    }
}

/// Coerce a scalar JSON value to its textual form.
///
/// Strings pass through, numbers and booleans use their canonical display
/// form (so filter options and equality filters agree), null and nested
/// arrays/objects have no textual form.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
