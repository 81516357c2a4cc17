//! Error types for the request builder and the transport seam.
//!
//! # Design
//! `ConfigurationError` covers everything caught before a request leaves the
//! process: missing parameters, malformed options, unknown endpoints. It is
//! `Clone + PartialEq` so tests and callers can match on it directly.
//! `ApiError` is what a transport reports back through the completion
//! channel; configuration errors are folded into it via `From`.

use serde_json::Value;
use thiserror::Error;

/// Client-side, pre-flight validation failure. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A required parameter was absent or `null`.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// A path segment needed by the selected URL shape was absent.
    #[error("Missing required parameter of the url: {0}")]
    MissingUrlParameter(String),

    /// `options.headers` was present but not an object.
    #[error("Headers should be an object, instead got: {0}")]
    InvalidHeaders(&'static str),

    /// The caller overrode `method` with something that is not an HTTP verb.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The params bag was not an object.
    #[error("Params should be an object, instead got: {0}")]
    InvalidParams(&'static str),

    /// The options bag could not be interpreted.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// No endpoint is registered under the dotted name.
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),
}

impl ConfigurationError {
    /// Name of the offending field, where the error is about one.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ConfigurationError::MissingParameter(name)
            | ConfigurationError::MissingUrlParameter(name) => Some(name),
            ConfigurationError::InvalidHeaders(_) => Some("headers"),
            ConfigurationError::InvalidMethod(_) => Some("method"),
            ConfigurationError::InvalidParams(_)
            | ConfigurationError::InvalidOptions(_)
            | ConfigurationError::UnknownEndpoint(_) => None,
        }
    }
}

/// Errors delivered through a transport's completion channel.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The call never left the client.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The server returned 404 and the caller did not ignore it.
    #[error("resource not found: {body}")]
    NotFound { body: String },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    ResponseError { status: u16, body: String },

    /// The round-trip itself failed (connection, timeout, task panic).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The request body could not be rendered as JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The response body did not match the requested type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

impl ApiError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, ApiError::Configuration(_))
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::ResponseError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Runtime type name of a JSON value, spelled the way error messages report it.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
