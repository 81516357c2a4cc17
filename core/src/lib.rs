//! Request builder for the Elasticsearch REST API.
//!
//! # Overview
//! Turns a bag of loosely-typed call parameters into a concrete
//! `HttpRequest` (method, path, querystring, body) and hands it to an
//! injected `Transport`. The builder never touches the network, so every
//! endpoint is deterministic and testable without a cluster.
//!
//! # Design
//! - One generic pipeline (`Endpoint::build`) driven by a static descriptor
//!   table in `api`. Adding an endpoint means adding data, not code.
//! - Pre-flight failures are `ConfigurationError`s and are delivered through
//!   the same completion channel as transport outcomes.
//! - `Client` is stateless; it holds only its transport.
//! - `HttpTransport` is a reference `ureq`-backed transport. Callers are free
//!   to supply their own.

pub mod api;
pub mod builder;
pub mod call;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod normalize;
pub mod params;
pub mod transport;

pub use call::{Arg, CallArgs};
pub use client::{Client, Transport};
pub use endpoint::Endpoint;
pub use error::{ApiError, ConfigurationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestBody};
pub use params::{Ignore, Params, RequestOptions};
pub use transport::{Completion, HttpTransport, ResponseCallback, ResponseFuture, TransportConfig};
