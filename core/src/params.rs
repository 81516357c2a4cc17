//! The flat parameter bag and the per-call options.
//!
//! # Design
//! `Params` is a JSON object: path segments, `body`, an optional `method`
//! override and query options all live side by side, exactly as callers of
//! the REST API think of them. A `null` value is treated as absent by every
//! accessor, so "omitted" and "explicitly null" never diverge.
//!
//! `RequestOptions` is deserializable from JSON so loosely-typed callers can
//! hand over whatever they have; `headers` stays a raw `Value` until the
//! header validator has looked at it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{json_type_name, ConfigurationError};

/// Flat parameter bag for a single call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Value under `key`, treating `null` as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` from the bag, treating `null` as absent.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key).filter(|v| !v.is_null())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params(map)
    }
}

impl TryFrom<Value> for Params {
    type Error = ConfigurationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Params(map)),
            Value::Null => Ok(Params::default()),
            other => Err(ConfigurationError::InvalidParams(json_type_name(&other))),
        }
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Status codes that should not be treated as failures.
///
/// Callers may give one code or a list; the builder normalizes a lone code
/// into a one-element list before the transport sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ignore {
    One(u16),
    Many(Vec<u16>),
}

impl Ignore {
    pub fn normalize(self) -> Ignore {
        match self {
            Ignore::One(status) => Ignore::Many(vec![status]),
            many => many,
        }
    }

    pub fn statuses(&self) -> &[u16] {
        match self {
            Ignore::One(status) => std::slice::from_ref(status),
            Ignore::Many(statuses) => statuses,
        }
    }

    pub fn contains(&self, status: u16) -> bool {
        self.statuses().contains(&status)
    }
}

/// Per-call transport options.
///
/// Only `headers`, `ignore` and `warnings` are interpreted; every other field
/// is carried through to the transport untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Ignore>,

    /// Set by the builder: `None` when every parameter was recognized,
    /// otherwise one message per dropped parameter. Never an empty list.
    #[serde(default)]
    pub warnings: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one header, turning `headers` into an object if it was unset.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let headers = self.headers.get_or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = headers {
            map.insert(name.into(), Value::String(value.into()));
        }
        self
    }

    pub fn ignore(mut self, ignore: Ignore) -> Self {
        self.ignore = Some(ignore);
        self
    }

    /// Headers as name/value pairs. Non-string values are rendered as JSON.
    pub fn header_pairs(&self) -> Vec<(String, String)> {
        match &self.headers {
            Some(Value::Object(map)) => map
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| {
                    let value = match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (k.clone(), value)
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl TryFrom<Value> for RequestOptions {
    type Error = ConfigurationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(RequestOptions::default()),
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| ConfigurationError::InvalidOptions(e.to_string()))
            }
            other => Err(ConfigurationError::InvalidOptions(format!(
                "expected an object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_values_count_as_absent() {
        let mut params = Params::try_from(json!({"index": null, "id": "1"})).unwrap();
        assert!(!params.contains("index"));
        assert_eq!(params.get("id"), Some(&json!("1")));
        assert_eq!(params.take("index"), None);
        assert_eq!(params.take("id"), Some(json!("1")));
        assert!(params.is_empty());
    }

    #[test]
    fn params_reject_non_objects() {
        let err = Params::try_from(json!([1, 2])).unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidParams("array"));
        assert!(Params::try_from(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn ignore_accepts_one_or_many() {
        let one: RequestOptions = RequestOptions::try_from(json!({"ignore": 404})).unwrap();
        assert_eq!(one.ignore, Some(Ignore::One(404)));
        assert_eq!(one.ignore.clone().unwrap().normalize(), Ignore::Many(vec![404]));

        let many: RequestOptions = RequestOptions::try_from(json!({"ignore": [404, 409]})).unwrap();
        assert_eq!(many.ignore.clone().unwrap().normalize(), Ignore::Many(vec![404, 409]));
        assert!(many.ignore.unwrap().contains(409));
    }

    #[test]
    fn options_keep_unknown_fields() {
        let opts = RequestOptions::try_from(json!({"requestTimeout": 500, "maxRetries": 2})).unwrap();
        assert_eq!(opts.extra["requestTimeout"], json!(500));
        assert_eq!(opts.extra["maxRetries"], json!(2));
        assert!(opts.headers.is_none());
    }

    #[test]
    fn options_reject_bad_ignore() {
        let err = RequestOptions::try_from(json!({"ignore": "404"})).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidOptions(_)));
    }

    #[test]
    fn header_builder_collects_pairs() {
        let opts = RequestOptions::new().header("x-opaque-id", "abc").header("x-trace", "1");
        let mut pairs = opts.header_pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("x-opaque-id".to_string(), "abc".to_string()),
                ("x-trace".to_string(), "1".to_string()),
            ]
        );
    }
}
