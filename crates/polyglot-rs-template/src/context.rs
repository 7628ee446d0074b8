//! Parameter values for template rendering.
//!
//! Provides [`Value`] for representing dynamic parameter values and
//! [`Params`], the string-keyed map templates are rendered against.

use std::collections::HashMap;

/// The parameter map a template is rendered against.
pub type Params = HashMap<String, Value>;

/// A dynamic parameter value.
///
/// Covers the value shapes a caller can hand to the resolver: strings,
/// numbers, booleans, nested lists and maps, and the absence of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value.
    String(String),
    /// A 64-bit integer.
    Integer(i64),
    /// A 64-bit floating point number.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A key-value mapping.
    Dict(HashMap<String, Value>),
    /// The absence of a value.
    None,
}

impl Value {
    /// Converts this value to its rendered string form.
    ///
    /// `None` renders as the empty string; integer-valued floats keep one
    /// decimal place so `1.0` does not collapse to `1`.
    pub fn to_display_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => {
                if f.fract() == 0.0 {
                    format!("{f:.1}")
                } else {
                    f.to_string()
                }
            }
            Self::Bool(b) => b.to_string(),
            Self::List(items) => {
                let inner: Vec<String> = items.iter().map(Self::to_display_string).collect();
                format!("[{}]", inner.join(", "))
            }
            Self::Dict(map) => {
                let mut inner: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("{k}: {}", v.to_display_string()))
                    .collect();
                inner.sort();
                format!("{{{}}}", inner.join(", "))
            }
            Self::None => String::new(),
        }
    }

    /// Resolves one path segment on this value (`user.name`, `items.0`).
    pub fn resolve_path(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Dict(map) => map.get(key),
            Self::List(list) => key.parse::<usize>().ok().and_then(|idx| list.get(idx)),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::None,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(0.0)), Self::Integer),
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Array(items) => Self::List(items.iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => Self::Dict(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Normalizes a JSON parameter bag into a [`Params`] map.
///
/// Only objects carry named parameters; any other shape (array, scalar,
/// null) yields an empty map, so rendering proceeds with no substitutions
/// rather than failing.
pub fn params_from_json(value: &serde_json::Value) -> Params {
    match value {
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v)))
            .collect(),
        _ => Params::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(Value::from("hi").to_display_string(), "hi");
        assert_eq!(Value::from(42).to_display_string(), "42");
        assert_eq!(Value::from(2.0).to_display_string(), "2.0");
        assert_eq!(Value::from(2.5).to_display_string(), "2.5");
        assert_eq!(Value::from(true).to_display_string(), "true");
        assert_eq!(Value::None.to_display_string(), "");
    }

    #[test]
    fn test_resolve_path_dict_and_list() {
        let mut map = HashMap::new();
        map.insert("name".to_string(), Value::from("Ada"));
        let dict = Value::Dict(map);
        assert_eq!(dict.resolve_path("name"), Some(&Value::from("Ada")));
        assert_eq!(dict.resolve_path("missing"), None);

        let list = Value::List(vec![Value::from(1), Value::from(2)]);
        assert_eq!(list.resolve_path("1"), Some(&Value::from(2)));
        assert_eq!(list.resolve_path("5"), None);
        assert_eq!(list.resolve_path("x"), None);

        assert_eq!(Value::from("scalar").resolve_path("x"), None);
    }

    #[test]
    fn test_params_from_json_object() {
        let json = serde_json::json!({"name": "Ada", "count": 3, "nested": {"a": true}});
        let params = params_from_json(&json);
        assert_eq!(params.get("name"), Some(&Value::from("Ada")));
        assert_eq!(params.get("count"), Some(&Value::from(3)));
        assert_eq!(
            params.get("nested").and_then(|v| v.resolve_path("a")),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn test_params_from_json_non_object_is_empty() {
        assert!(params_from_json(&serde_json::json!([1, 2])).is_empty());
        assert!(params_from_json(&serde_json::json!("text")).is_empty());
        assert!(params_from_json(&serde_json::Value::Null).is_empty());
    }
}
