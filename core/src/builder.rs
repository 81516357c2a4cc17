//! The request-building engine.
//!
//! # Design
//! Every endpoint runs through the same single-pass pipeline:
//! validate-required → validate-url-components → validate-headers →
//! extract path/body/method → normalize-query → normalize-ignore →
//! build-path → assemble. The first failing step short-circuits with a
//! `ConfigurationError`; nothing after it runs. The engine is a pure function
//! of the descriptor and the call arguments.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::endpoint::{BodyKind, Endpoint, PathShape, Segment};
use crate::error::{json_type_name, ConfigurationError};
use crate::http::{encode_component, value_to_text, HttpMethod, HttpRequest, RequestBody};
use crate::normalize::normalize_query;
use crate::params::{Ignore, Params, RequestOptions};

impl Endpoint {
    /// Turn a parameter bag and options into a request descriptor.
    ///
    /// The returned options carry the normalized `ignore` list and the
    /// collected `warnings` (`None` when every key was recognized).
    pub fn build(
        &self,
        mut params: Params,
        mut options: RequestOptions,
    ) -> Result<(HttpRequest, RequestOptions), ConfigurationError> {
        validate_required(self, &params)?;
        validate_url_components(self, &params)?;
        validate_headers(&options)?;

        let method = params.take("method");
        let body = params.take("body");
        let segments = extract_path_params(self, &mut params);

        let mut warnings = Vec::new();
        let querystring = normalize_query(self, params, &mut warnings);

        options.ignore = options.ignore.map(Ignore::normalize);

        let shape = select_shape(self, &segments)?;
        let path = render_path(self, shape, &segments)?;
        let method = match method {
            Some(value) => parse_method(&value)?,
            None => shape.method.resolve(body.is_some()),
        };

        let body = assemble_body(self.body, body);

        debug!(endpoint = self.name, %method, %path, "built request");

        options.warnings = if warnings.is_empty() { None } else { Some(warnings) };
        Ok((
            HttpRequest {
                method,
                path,
                body,
                querystring,
            },
            options,
        ))
    }
}

/// Human-facing name of a parameter, listing the synonym when there is one.
fn display_name(endpoint: &Endpoint, name: &str) -> String {
    match endpoint.path_param(name).and_then(|p| p.alias) {
        Some(alias) => format!("{name} or {alias}"),
        None => name.to_string(),
    }
}

/// Whether `name` (or its path synonym) holds a non-null value.
fn is_given(endpoint: &Endpoint, params: &Params, name: &str) -> bool {
    if params.contains(name) {
        return true;
    }
    endpoint
        .path_param(name)
        .and_then(|p| p.alias)
        .is_some_and(|alias| params.contains(alias))
}

fn validate_required(endpoint: &Endpoint, params: &Params) -> Result<(), ConfigurationError> {
    match endpoint.required.iter().find(|name| !is_given(endpoint, params, name)) {
        Some(name) => Err(ConfigurationError::MissingParameter(display_name(endpoint, name))),
        None => Ok(()),
    }
}

fn validate_url_components(endpoint: &Endpoint, params: &Params) -> Result<(), ConfigurationError> {
    for (param, needs) in endpoint.url_components {
        if !is_given(endpoint, params, param) {
            continue;
        }
        if let Some(missing) = needs.iter().find(|need| !is_given(endpoint, params, need)) {
            return Err(ConfigurationError::MissingUrlParameter(display_name(endpoint, missing)));
        }
    }
    Ok(())
}

fn validate_headers(options: &RequestOptions) -> Result<(), ConfigurationError> {
    match &options.headers {
        None | Some(Value::Null) | Some(Value::Object(_)) => Ok(()),
        Some(other) => Err(ConfigurationError::InvalidHeaders(json_type_name(other))),
    }
}

/// Pull every path parameter (both spellings) out of the bag.
/// The canonical spelling wins when both are present, unless it is an empty
/// string and the synonym is not.
fn extract_path_params(endpoint: &Endpoint, params: &mut Params) -> BTreeMap<&'static str, Value> {
    let mut segments = BTreeMap::new();
    for param in endpoint.path_params {
        let canonical = params.take(param.name);
        let alias = param.alias.and_then(|alias| params.take(alias));
        let value = match (canonical, alias) {
            (Some(Value::String(empty)), Some(alias)) if empty.is_empty() => Some(alias),
            (canonical, alias) => canonical.or(alias),
        };
        if let Some(value) = value {
            segments.insert(param.name, value);
        }
    }
    segments
}

fn select_shape<'e>(
    endpoint: &'e Endpoint,
    segments: &BTreeMap<&'static str, Value>,
) -> Result<&'e PathShape, ConfigurationError> {
    if let Some(shape) = endpoint
        .shapes
        .iter()
        .find(|shape| shape.when.iter().all(|name| segments.contains_key(name)))
    {
        return Ok(shape);
    }
    let missing = endpoint
        .shapes
        .last()
        .and_then(|shape| shape.when.iter().find(|name| !segments.contains_key(*name)))
        .copied()
        .unwrap_or("path");
    Err(ConfigurationError::MissingUrlParameter(display_name(endpoint, missing)))
}

fn render_path(
    endpoint: &Endpoint,
    shape: &PathShape,
    segments: &BTreeMap<&'static str, Value>,
) -> Result<String, ConfigurationError> {
    let mut path = String::from("/");
    for segment in shape.segments {
        match segment {
            Segment::Literal(literal) => path.push_str(literal),
            Segment::Param(name) => {
                let value = segments
                    .get(name)
                    .ok_or_else(|| ConfigurationError::MissingUrlParameter(display_name(endpoint, name)))?;
                path.push_str(&encode_component(&value_to_text(value)));
            }
        }
        path.push('/');
    }
    Ok(path)
}

fn parse_method(value: &Value) -> Result<HttpMethod, ConfigurationError> {
    match value {
        Value::String(verb) => verb.parse(),
        other => Err(ConfigurationError::InvalidMethod(other.to_string())),
    }
}

fn assemble_body(kind: BodyKind, body: Option<Value>) -> RequestBody {
    match (kind, body) {
        (BodyKind::None, _) => RequestBody::None,
        (_, None) => RequestBody::Empty,
        (BodyKind::Ndjson, Some(Value::Array(lines))) => RequestBody::Ndjson(lines),
        (_, Some(value)) => RequestBody::Json(value),
    }
}
