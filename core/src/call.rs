//! Call-shape normalization.
//!
//! # Design
//! REST callers use several argument shapes: `(callback)`,
//! `(params, callback)`, `(params, options, callback)`, plus the awaitable
//! variants without a callback. `CallArgs` records what was passed in each
//! positional slot, and `resolve` collapses that into one canonical
//! `(params, options, callback)` triple before any validation runs.

use crate::params::{Params, RequestOptions};

/// What a caller put into one positional slot.
#[derive(Debug)]
pub enum Arg<T, C> {
    Absent,
    Value(T),
    Callback(C),
}

impl<T, C> Default for Arg<T, C> {
    fn default() -> Self {
        Arg::Absent
    }
}

/// The three positional arguments of a call, before resolution.
#[derive(Debug)]
pub struct CallArgs<C> {
    params: Arg<Params, C>,
    options: Arg<RequestOptions, C>,
    callback: Option<C>,
}

/// Canonical form of a call.
#[derive(Debug)]
pub struct ResolvedCall<C> {
    pub params: Params,
    pub options: RequestOptions,
    pub callback: Option<C>,
}

impl<C> Default for CallArgs<C> {
    fn default() -> Self {
        Self {
            params: Arg::Absent,
            options: Arg::Absent,
            callback: None,
        }
    }
}

impl<C> CallArgs<C> {
    /// No arguments at all; the outcome is awaited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments exactly as they sit in the three positional slots.
    pub fn positional(params: Arg<Params, C>, options: Arg<RequestOptions, C>, callback: Option<C>) -> Self {
        Self {
            params,
            options,
            callback,
        }
    }

    /// `(callback)`
    pub fn from_callback(callback: C) -> Self {
        Self::positional(Arg::Callback(callback), Arg::Absent, None)
    }

    /// `(params)`
    pub fn from_params(params: Params) -> Self {
        Self::positional(Arg::Value(params), Arg::Absent, None)
    }

    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = Arg::Value(options);
        self
    }

    /// Attach a completion callback in the trailing slot.
    pub fn callback(mut self, callback: C) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Collapse the positional slots into `(params, options, callback)`.
    ///
    /// A callback in the options slot is the callback and leaves options
    /// empty. A callback in the params slot, or an absent params slot, resets
    /// both params and options. A trailing callback is kept unless a slot
    /// already supplied one.
    pub fn resolve(self) -> ResolvedCall<C> {
        let mut callback = self.callback;

        let mut options = match self.options {
            Arg::Absent => RequestOptions::default(),
            Arg::Value(options) => options,
            Arg::Callback(cb) => {
                callback = Some(cb);
                RequestOptions::default()
            }
        };

        let params = match self.params {
            Arg::Value(params) => params,
            Arg::Absent => {
                options = RequestOptions::default();
                Params::default()
            }
            Arg::Callback(cb) => {
                callback = Some(cb);
                options = RequestOptions::default();
                Params::default()
            }
        };

        ResolvedCall {
            params,
            options,
            callback,
        }
    }
}

impl<C> From<()> for CallArgs<C> {
    fn from(_: ()) -> Self {
        CallArgs::new()
    }
}

impl<C> From<Params> for CallArgs<C> {
    fn from(params: Params) -> Self {
        CallArgs::from_params(params)
    }
}

impl<C> From<(Params, RequestOptions)> for CallArgs<C> {
    fn from((params, options): (Params, RequestOptions)) -> Self {
        CallArgs::from_params(params).options(options)
    }
}
