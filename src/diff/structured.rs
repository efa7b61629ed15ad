use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use treediff::{value::Key, Delegate};

/// A simplified view of a value involved in a change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ValueRepr {
    String(String),
    Number(serde_json::Number),
    Boolean(bool),
    Null,
    /// Summary such as `[Array len=5]`.
    Array(String),
    /// Summary such as `{Object}` or `{text}` for tagged primitives.
    Object(String),
}

impl ValueRepr {
    fn from_json_value(val: &JsonValue) -> Self {
        match val {
            JsonValue::Null => ValueRepr::Null,
            JsonValue::Bool(b) => ValueRepr::Boolean(*b),
            JsonValue::Number(n) => ValueRepr::Number(n.clone()),
            JsonValue::String(s) => ValueRepr::String(s.clone()),
            JsonValue::Array(arr) => ValueRepr::Array(format!("[Array len={}]", arr.len())),
            // Primitives serialize as `{ "text": {...} }`; show the variant.
            JsonValue::Object(map) if map.len() == 1 => {
                let variant = map.keys().next().map(String::as_str).unwrap_or("Object");
                ValueRepr::Object(format!("{{{}}}", variant))
            }
            JsonValue::Object(_) => ValueRepr::Object("{Object}".to_string()),
        }
    }

    pub fn format_for_display(&self) -> String {
        match self {
            ValueRepr::String(s) => {
                let escaped = s
                    .replace('\\', "\\\\")
                    .replace('\n', "\\n")
                    .replace('\t', "\\t")
                    .replace('\'', "\\'");
                format!("'{}'", escaped)
            }
            ValueRepr::Number(n) => n.to_string(),
            ValueRepr::Boolean(b) => b.to_string(),
            ValueRepr::Null => "null".to_string(),
            ValueRepr::Array(s) | ValueRepr::Object(s) => s.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
}

/// A single difference between two serialized documents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    /// Dot-separated path with bracket indices, e.g. `slides[1].primitives[0].text.frame.y`.
    pub path: String,
    pub change_type: ChangeType,
    /// None for `Added`.
    pub old_value: Option<ValueRepr>,
    /// None for `Removed`.
    pub new_value: Option<ValueRepr>,
}

impl Change {
    /// The slide a change belongs to, if its path is under `slides[n]`.
    pub fn slide_index(&self) -> Option<usize> {
        let rest = self.path.strip_prefix("slides[")?;
        let end = rest.find(']')?;
        rest[..end].parse().ok()
    }

    /// The path below the slide, e.g. `primitives[0].text.frame.y`.
    pub fn slide_path(&self) -> &str {
        match self.path.strip_prefix("slides[").and_then(|rest| rest.find(']').map(|end| &rest[end + 1..])) {
            Some(rest) => rest.strip_prefix('.').unwrap_or(rest),
            None => &self.path,
        }
    }
}

/// treediff delegate collecting changes into a flat list.
#[derive(Debug, Default)]
pub(crate) struct ChangeCollector {
    pub(crate) changes: Vec<Change>,
    current_path: Vec<String>,
}

impl ChangeCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn segment(&self, key: &Key) -> String {
        match key {
            Key::String(s) if self.current_path.is_empty() => s.clone(),
            Key::String(s) => format!(".{}", s),
            Key::Index(i) => format!("[{}]", i),
        }
    }

    fn format_path(&self) -> String {
        self.current_path.concat()
    }

    /// Path of a keyed leaf below the current position.
    fn path_with(&self, key: &Key) -> String {
        let mut path = self.format_path();
        path.push_str(&self.segment(key));
        path
    }
}

impl<'a> Delegate<'a, Key, JsonValue> for ChangeCollector {
    fn push(&mut self, key: &Key) {
        let segment = self.segment(key);
        self.current_path.push(segment);
    }

    fn pop(&mut self) {
        self.current_path.pop();
    }

    fn removed<'b>(&mut self, key: &'b Key, value: &'a JsonValue) {
        self.changes.push(Change {
            path: self.path_with(key),
            change_type: ChangeType::Removed,
            old_value: Some(ValueRepr::from_json_value(value)),
            new_value: None,
        });
    }

    fn added<'b>(&mut self, key: &'b Key, value: &'a JsonValue) {
        self.changes.push(Change {
            path: self.path_with(key),
            change_type: ChangeType::Added,
            old_value: None,
            new_value: Some(ValueRepr::from_json_value(value)),
        });
    }

    fn modified(&mut self, old: &'a JsonValue, new: &'a JsonValue) {
        self.changes.push(Change {
            path: self.format_path(),
            change_type: ChangeType::Modified,
            old_value: Some(ValueRepr::from_json_value(old)),
            new_value: Some(ValueRepr::from_json_value(new)),
        });
    }
}
