//! Client facade over the request builder and an injected transport.
//!
//! # Design
//! `Client` holds only its transport and carries no mutable state between
//! calls. A call resolves the argument shape, runs the endpoint's build
//! pipeline, and hands the result to the transport: the request on success,
//! the configuration error otherwise. Both go through the same completion
//! channel, so the caller never has to handle errors in two places. The
//! transport's output is returned unchanged.

use tracing::warn;

use crate::api;
use crate::call::{CallArgs, ResolvedCall};
use crate::endpoint::Endpoint;
use crate::error::ConfigurationError;
use crate::http::HttpRequest;
use crate::params::RequestOptions;

/// Performs the I/O for a built request.
///
/// `Callback` is the completion handler type callers may supply; `Output` is
/// what a call returns (an awaitable, a handle, or nothing at all).
pub trait Transport {
    type Callback;
    type Output;

    fn make_request(
        &self,
        request: HttpRequest,
        options: RequestOptions,
        callback: Option<Self::Callback>,
    ) -> Self::Output;

    /// Deliver a pre-flight failure through the caller's completion channel.
    fn handle_error(&self, error: ConfigurationError, callback: Option<Self::Callback>) -> Self::Output;
}

/// Stateless entry point for every endpoint.
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run `endpoint` with the given call arguments.
    pub fn call(&self, endpoint: &Endpoint, args: impl Into<CallArgs<T::Callback>>) -> T::Output {
        let ResolvedCall {
            params,
            options,
            callback,
        } = args.into().resolve();

        match endpoint.build(params, options) {
            Ok((request, options)) => self.transport.make_request(request, options, callback),
            Err(error) => {
                warn!(endpoint = endpoint.name, %error, "rejected before dispatch");
                self.transport.handle_error(error, callback)
            }
        }
    }

    /// Like [`Client::call`], looking the endpoint up by dotted name.
    pub fn call_named(&self, name: &str, args: impl Into<CallArgs<T::Callback>>) -> T::Output {
        match api::find(name) {
            Some(endpoint) => self.call(endpoint, args),
            None => {
                let ResolvedCall { callback, .. } = args.into().resolve();
                self.transport
                    .handle_error(ConfigurationError::UnknownEndpoint(name.to_string()), callback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::{indices, root};
    use crate::call::Arg;
    use crate::http::HttpMethod;
    use crate::params::{Ignore, Params};
    use serde_json::json;

    /// What the recording transport saw for one call.
    #[derive(Debug, PartialEq)]
    enum Seen {
        Request(HttpRequest, RequestOptions, Option<u32>),
        Error(ConfigurationError, Option<u32>),
    }

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<Seen>>,
    }

    impl Transport for Recorder {
        type Callback = u32;
        type Output = usize;

        fn make_request(&self, request: HttpRequest, options: RequestOptions, callback: Option<u32>) -> usize {
            let mut seen = self.seen.borrow_mut();
            seen.push(Seen::Request(request, options, callback));
            seen.len()
        }

        fn handle_error(&self, error: ConfigurationError, callback: Option<u32>) -> usize {
            let mut seen = self.seen.borrow_mut();
            seen.push(Seen::Error(error, callback));
            seen.len()
        }
    }

    fn client() -> Client<Recorder> {
        Client::new(Recorder::default())
    }

    #[test]
    fn output_is_passed_through() {
        let client = client();
        assert_eq!(client.call(&indices::STATS, ()), 1);
        assert_eq!(client.call(&indices::STATS, ()), 2);
    }

    #[test]
    fn callback_shapes_reach_the_transport_identically() {
        let client = client();
        client.call(&indices::STATS, CallArgs::from_callback(7));
        client.call(
            &indices::STATS,
            CallArgs::positional(Arg::Value(Params::new()), Arg::Callback(7), None),
        );
        client.call(&indices::STATS, CallArgs::from_params(Params::new()).options(RequestOptions::new()).callback(7));

        let seen = client.transport().seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], seen[1]);
        assert_eq!(seen[1], seen[2]);
        match &seen[0] {
            Seen::Request(req, opts, cb) => {
                assert_eq!(req.path, "/_stats/");
                assert_eq!(req.method, HttpMethod::Get);
                assert_eq!(opts.warnings, None);
                assert_eq!(*cb, Some(7));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_parameter_never_reaches_make_request() {
        let client = client();
        client.call(&root::UPDATE, CallArgs::from_params(Params::new().set("index", "i")).callback(3));
        let seen = client.transport().seen.borrow();
        assert_eq!(
            *seen,
            vec![Seen::Error(ConfigurationError::MissingParameter("id".to_string()), Some(3))]
        );
    }

    #[test]
    fn options_are_normalized_before_delegation() {
        let client = client();
        let params = Params::try_from(json!({"index": "i", "bogus": true})).unwrap();
        client.call(&indices::STATS, (params, RequestOptions::new().ignore(Ignore::One(404))));
        let seen = client.transport().seen.borrow();
        match &seen[0] {
            Seen::Request(_, opts, None) => {
                assert_eq!(opts.ignore, Some(Ignore::Many(vec![404])));
                assert_eq!(opts.warnings.as_ref().map(Vec::len), Some(1));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn call_named_dispatches_or_reports_unknown() {
        let client = client();
        client.call_named("indices.stats", Params::new().set("metric", "docs"));
        client.call_named("indices.nope", CallArgs::from_callback(1));
        let seen = client.transport().seen.borrow();
        assert!(matches!(&seen[0], Seen::Request(req, _, _) if req.path == "/_stats/docs/"));
        assert_eq!(
            seen[1],
            Seen::Error(ConfigurationError::UnknownEndpoint("indices.nope".to_string()), Some(1))
        );
    }
}
