//! Reference blocking-HTTP transport.
//!
//! # Design
//! `HttpTransport` executes built requests with a `ureq` agent. Blocking I/O
//! runs on Tokio's blocking pool so async callers get an awaitable and
//! callback callers are not stalled. Without a Tokio runtime the request runs
//! inline: callback-mode calls deliver before returning, and awaitables
//! resolve on first poll.
//!
//! There is deliberately no retry or connection-pool management here; the
//! agent's defaults apply.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{self, BoxFuture, FutureExt};
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::Transport;
use crate::error::{ApiError, ConfigurationError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::params::{Ignore, RequestOptions};

/// Completion handler for callback-style calls.
pub type ResponseCallback = Box<dyn FnOnce(Result<HttpResponse, ApiError>) + Send + 'static>;

/// Awaitable outcome of a call made without a callback.
pub type ResponseFuture = BoxFuture<'static, Result<HttpResponse, ApiError>>;

/// What a call through `HttpTransport` hands back.
pub enum Completion {
    /// The callback has already been invoked.
    Delivered,
    /// The callback will be invoked from the blocking pool.
    Spawned(JoinHandle<()>),
    /// No callback was given; await this for the outcome. Runs on the
    /// blocking pool when polled inside a Tokio runtime, inline otherwise.
    Pending(ResponseFuture),
}

impl Completion {
    /// The awaitable, when the call was made without a callback.
    pub fn pending(self) -> Option<ResponseFuture> {
        match self {
            Completion::Pending(fut) => Some(fut),
            _ => None,
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Delivered => f.write_str("Delivered"),
            Completion::Spawned(_) => f.write_str("Spawned"),
            Completion::Pending(_) => f.write_str("Pending"),
        }
    }
}

/// Connection settings for `HttpTransport`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub base_url: String,
    pub timeout_ms: Option<u64>,
    /// Sent with every request; per-call `options.headers` override them.
    pub headers: BTreeMap<String, String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9200".to_string(),
            timeout_ms: None,
            headers: BTreeMap::new(),
        }
    }
}

impl TransportConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Defaults overlaid with `ELASTICSEARCH_URL` and `ELASTICSEARCH_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("ELASTICSEARCH_URL") {
            config.base_url = url;
        }
        if let Some(ms) = std::env::var("ELASTICSEARCH_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.parse().ok())
        {
            config.timeout_ms = Some(ms);
        }
        config
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Executes requests over HTTP with `ureq`.
#[derive(Clone)]
pub struct HttpTransport {
    config: Arc<TransportConfig>,
    agent: ureq::Agent,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").field("config", &self.config).finish()
    }
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Self {
        // Status interpretation belongs to `check_status`, not the agent.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout_ms.map(Duration::from_millis))
            .build()
            .new_agent();
        Self {
            config: Arc::new(config),
            agent,
        }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Perform one blocking round-trip and apply `options.ignore`.
    pub fn send(&self, request: &HttpRequest, options: &RequestOptions) -> Result<HttpResponse, ApiError> {
        let url = request.url(self.config.base_url());
        let payload = request.body.to_payload()?;
        let headers = merge_headers(
            &self.config.headers,
            options,
            payload.as_ref().and(request.body.content_type()),
        );

        let response = execute(&self.agent, request.method, &url, &headers, payload)?;
        debug!(method = %request.method, %url, status = response.status, "round-trip complete");
        check_status(response, options.ignore.as_ref())
    }
}

impl Transport for HttpTransport {
    type Callback = ResponseCallback;
    type Output = Completion;

    fn make_request(
        &self,
        request: HttpRequest,
        options: RequestOptions,
        callback: Option<ResponseCallback>,
    ) -> Completion {
        let transport = self.clone();
        match callback {
            Some(callback) => match tokio::runtime::Handle::try_current() {
                Ok(handle) => Completion::Spawned(
                    handle.spawn_blocking(move || callback(transport.send(&request, &options))),
                ),
                Err(_) => {
                    callback(transport.send(&request, &options));
                    Completion::Delivered
                }
            },
            None => Completion::Pending(
                async move {
                    let handle = match tokio::runtime::Handle::try_current() {
                        Ok(handle) => handle,
                        Err(_) => return transport.send(&request, &options),
                    };
                    match handle.spawn_blocking(move || transport.send(&request, &options)).await {
                        Ok(result) => result,
                        Err(e) => Err(ApiError::Transport(e.to_string())),
                    }
                }
                .boxed(),
            ),
        }
    }

    fn handle_error(&self, error: ConfigurationError, callback: Option<ResponseCallback>) -> Completion {
        match callback {
            Some(callback) => {
                callback(Err(error.into()));
                Completion::Delivered
            }
            None => Completion::Pending(future::ready(Err(ApiError::from(error))).boxed()),
        }
    }
}

/// Default headers, then per-call headers (case-insensitive override), then
/// a content type if the body needs one and none was given.
fn merge_headers(
    defaults: &BTreeMap<String, String>,
    options: &RequestOptions,
    content_type: Option<&'static str>,
) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = defaults.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    for (name, value) in options.header_pairs() {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        headers.push((name, value));
    }
    if let Some(content_type) = content_type {
        if !headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("content-type")) {
            headers.push(("content-type".to_string(), content_type.to_string()));
        }
    }
    headers
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn execute(
    agent: &ureq::Agent,
    method: HttpMethod,
    url: &str,
    headers: &[(String, String)],
    payload: Option<String>,
) -> Result<HttpResponse, ApiError> {
    let result = match (method, payload) {
        (HttpMethod::Head, _) => with_headers(agent.head(url), headers).call(),
        (HttpMethod::Get, None) => with_headers(agent.get(url), headers).call(),
        (HttpMethod::Get, Some(body)) => with_headers(agent.get(url), headers)
            .force_send_body()
            .send(body.as_bytes()),
        (HttpMethod::Delete, None) => with_headers(agent.delete(url), headers).call(),
        (HttpMethod::Delete, Some(body)) => with_headers(agent.delete(url), headers)
            .force_send_body()
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => with_headers(agent.post(url), headers).send_empty(),
        (HttpMethod::Post, Some(body)) => with_headers(agent.post(url), headers).send(body.as_bytes()),
        (HttpMethod::Put, None) => with_headers(agent.put(url), headers).send_empty(),
        (HttpMethod::Put, Some(body)) => with_headers(agent.put(url), headers).send(body.as_bytes()),
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = if method == HttpMethod::Head {
        String::new()
    } else {
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?
    };

    Ok(HttpResponse { status, headers, body })
}

/// Map non-success status codes to the appropriate `ApiError` variant,
/// letting through anything listed in `ignore`.
pub fn check_status(response: HttpResponse, ignore: Option<&Ignore>) -> Result<HttpResponse, ApiError> {
    let status = response.status;
    if (200..300).contains(&status) || ignore.is_some_and(|ignore| ignore.contains(status)) {
        return Ok(response);
    }
    if status == 404 {
        return Err(ApiError::NotFound { body: response.body });
    }
    Err(ApiError::ResponseError {
        status,
        body: response.body,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::http::RequestBody;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: "body".to_string(),
        }
    }

    #[test]
    fn success_statuses_pass() {
        assert!(check_status(response(200), None).is_ok());
        assert!(check_status(response(201), None).is_ok());
    }

    #[test]
    fn not_found_maps_to_dedicated_variant() {
        let err = check_status(response(404), None).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[test]
    fn ignored_statuses_pass() {
        let ignore = Ignore::Many(vec![404, 409]);
        assert_eq!(check_status(response(404), Some(&ignore)).unwrap().status, 404);
        assert_eq!(check_status(response(409), Some(&ignore)).unwrap().status, 409);
        let err = check_status(response(500), Some(&ignore)).unwrap_err();
        assert!(matches!(err, ApiError::ResponseError { status: 500, .. }));
    }

    #[test]
    fn call_headers_override_defaults_case_insensitively() {
        let mut defaults = BTreeMap::new();
        defaults.insert("X-Opaque-Id".to_string(), "default".to_string());
        defaults.insert("user-agent".to_string(), "esapi".to_string());
        let options = RequestOptions::new().header("x-opaque-id", "call");
        let headers = merge_headers(&defaults, &options, Some("application/json"));
        assert_eq!(
            headers,
            vec![
                ("user-agent".to_string(), "esapi".to_string()),
                ("x-opaque-id".to_string(), "call".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn explicit_content_type_is_kept() {
        let options = RequestOptions::new().header("Content-Type", "application/vnd.elasticsearch+json");
        let headers = merge_headers(&BTreeMap::new(), &options, Some("application/json"));
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].1, "application/vnd.elasticsearch+json");
    }

    #[test]
    fn config_defaults_and_partial_json() {
        let config: TransportConfig = serde_json::from_str(r#"{"timeout_ms": 1500}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:9200");
        assert_eq!(config.timeout_ms, Some(1500));
        assert!(config.headers.is_empty());
        assert_eq!(TransportConfig::new("http://es:9200/").base_url(), "http://es:9200");
    }

    #[test]
    fn configuration_error_goes_to_callback() {
        let transport = HttpTransport::new(TransportConfig::default());
        let (tx, rx) = mpsc::channel();
        let completion = transport.handle_error(
            ConfigurationError::MissingParameter("index".to_string()),
            Some(Box::new(move |result| tx.send(result).unwrap())),
        );
        assert!(matches!(completion, Completion::Delivered));
        let err = rx.recv().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: index");
    }

    #[test]
    fn configuration_error_without_callback_is_awaitable() {
        let transport = HttpTransport::new(TransportConfig::default());
        let completion = transport.handle_error(ConfigurationError::InvalidHeaders("string"), None);
        let fut = completion.pending().expect("awaitable");
        let err = futures::executor::block_on(fut).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn callback_runs_inline_without_runtime() {
        let transport = HttpTransport::new(TransportConfig::new("http://127.0.0.1:1"));
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: "/".to_string(),
            body: RequestBody::None,
            querystring: BTreeMap::new(),
        };
        let (tx, rx) = mpsc::channel();
        let completion = transport.make_request(
            request,
            RequestOptions::default(),
            Some(Box::new(move |result| tx.send(result).unwrap())),
        );
        assert!(matches!(completion, Completion::Delivered));
        assert!(matches!(rx.recv().unwrap(), Err(ApiError::Transport(_))));
    }

    #[test]
    fn awaitable_runs_inline_on_a_foreign_executor() {
        let transport = HttpTransport::new(TransportConfig::new("http://127.0.0.1:1"));
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: "/".to_string(),
            body: RequestBody::None,
            querystring: BTreeMap::new(),
        };
        let fut = transport
            .make_request(request, RequestOptions::default(), None)
            .pending()
            .expect("awaitable");
        let result = futures::executor::block_on(fut);
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
