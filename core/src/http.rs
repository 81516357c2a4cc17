//! HTTP request and response descriptors for the host-does-IO pattern.
//!
//! # Design
//! These types describe a request as plain data: verb, percent-encoded path,
//! body, and canonical query map. The builder produces `HttpRequest` values
//! without touching the network; a `Transport` turns them into bytes on the
//! wire and hands back an `HttpResponse`.
//!
//! Path segments and query values are encoded with `encodeURIComponent`
//! rules so the wire format matches the other official clients byte for byte.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{ApiError, ConfigurationError};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            _ => Err(ConfigurationError::InvalidMethod(s.to_string())),
        }
    }
}

/// Request payload as assembled by the builder.
///
/// `None` is the body of endpoints that never take one (serialized as
/// `null`); `Empty` is what body-accepting endpoints carry when the caller
/// gave no body (serialized as `""`).
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    None,
    Empty,
    Json(Value),
    /// One JSON document per line, as used by `_bulk`.
    Ndjson(Vec<Value>),
}

impl RequestBody {
    pub fn is_none(&self) -> bool {
        matches!(self, RequestBody::None)
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::None | RequestBody::Empty => None,
            RequestBody::Json(_) => Some("application/json"),
            RequestBody::Ndjson(_) => Some("application/x-ndjson"),
        }
    }

    /// Render the body as it goes on the wire. Strings are sent verbatim.
    pub fn to_payload(&self) -> Result<Option<String>, ApiError> {
        match self {
            RequestBody::None | RequestBody::Empty => Ok(None),
            RequestBody::Json(value) => render_document(value).map(Some),
            RequestBody::Ndjson(lines) => {
                let mut out = String::new();
                for line in lines {
                    out.push_str(&render_document(line)?);
                    out.push('\n');
                }
                Ok(Some(out))
            }
        }
    }
}

fn render_document(value: &Value) -> Result<String, ApiError> {
    match value {
        Value::String(raw) => Ok(raw.clone()),
        other => serde_json::to_string(other).map_err(|e| ApiError::SerializationError(e.to_string())),
    }
}

impl Serialize for RequestBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RequestBody::None => serializer.serialize_none(),
            RequestBody::Empty => serializer.serialize_str(""),
            RequestBody::Json(value) => value.serialize(serializer),
            RequestBody::Ndjson(lines) => lines.serialize(serializer),
        }
    }
}

/// A fully-formed request described as plain data.
///
/// Built by `Endpoint::build`. `path` always starts and ends with `/`;
/// every key in `querystring` is one the endpoint accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: RequestBody,
    pub querystring: BTreeMap<String, Value>,
}

impl HttpRequest {
    /// Serialize `querystring` in key order, without the leading `?`.
    pub fn query_string(&self) -> String {
        self.querystring
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(&value_to_text(value))))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Absolute URL of this request against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let query = self.query_string();
        if query.is_empty() {
            format!("{base}{}", self.path)
        } else {
            format!("{base}{}?{query}", self.path)
        }
    }
}

/// An HTTP response described as plain data. The body is passed through raw.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// First header with this name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Percent-encode one URL component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Flatten a parameter value into the text that gets encoded.
///
/// Lists become comma-separated, the way Elasticsearch expects multi-valued
/// path parts and query options.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_to_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(querystring: BTreeMap<String, Value>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: "/_search/".to_string(),
            body: RequestBody::None,
            querystring,
        }
    }

    #[test]
    fn encode_component_keeps_unreserved_marks() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn encode_component_escapes_reserved_characters() {
        assert_eq!(encode_component("my index/1"), "my%20index%2F1");
        assert_eq!(encode_component("a,b"), "a%2Cb");
        assert_eq!(encode_component("ü"), "%C3%BC");
    }

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("HEAD".parse::<HttpMethod>().unwrap(), HttpMethod::Head);
        let err = "FETCH".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidMethod("FETCH".to_string()));
    }

    #[test]
    fn query_string_joins_lists_and_sorts_keys() {
        let mut qs = BTreeMap::new();
        qs.insert("size".to_string(), json!(10));
        qs.insert("_source_includes".to_string(), json!(["a", "b"]));
        qs.insert("q".to_string(), json!("title:rust lang"));
        qs.insert("pretty".to_string(), json!(true));
        assert_eq!(
            request(qs).query_string(),
            "_source_includes=a%2Cb&pretty=true&q=title%3Arust%20lang&size=10"
        );
    }

    #[test]
    fn url_omits_question_mark_without_query() {
        let req = request(BTreeMap::new());
        assert_eq!(req.url("http://localhost:9200/"), "http://localhost:9200/_search/");
    }

    #[test]
    fn request_serializes_body_variants() {
        let mut req = request(BTreeMap::new());
        assert_eq!(serde_json::to_value(&req).unwrap()["body"], Value::Null);
        req.body = RequestBody::Empty;
        assert_eq!(serde_json::to_value(&req).unwrap()["body"], json!(""));
        assert_eq!(serde_json::to_value(&req).unwrap()["method"], json!("GET"));
    }

    #[test]
    fn ndjson_payload_has_one_document_per_line() {
        let body = RequestBody::Ndjson(vec![json!({"index": {"_id": "1"}}), json!({"title": "x"})]);
        assert_eq!(
            body.to_payload().unwrap().unwrap(),
            "{\"index\":{\"_id\":\"1\"}}\n{\"title\":\"x\"}\n"
        );
        assert_eq!(body.content_type(), Some("application/x-ndjson"));
    }

    #[test]
    fn string_body_is_sent_verbatim() {
        let body = RequestBody::Json(json!("{\"query\":{}}"));
        assert_eq!(body.to_payload().unwrap().unwrap(), "{\"query\":{}}");
        assert_eq!(RequestBody::Empty.to_payload().unwrap(), None);
    }

    #[test]
    fn response_json_and_header_lookup() {
        let resp = HttpResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: r#"{"acknowledged":true}"#.to_string(),
        };
        assert_eq!(resp.header("content-type"), Some("application/json"));
        let v: Value = resp.json().unwrap();
        assert_eq!(v["acknowledged"], true);

        let bad = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        assert!(matches!(bad.json::<Value>(), Err(ApiError::DeserializationError(_))));
    }
}
