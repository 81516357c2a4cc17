//! Declarative endpoint descriptors.
//!
//! # Design
//! One `Endpoint` per REST operation, expressed as `'static` data: which keys
//! go into the path, which are required, which query keys are accepted and
//! under what aliases, and an ordered list of path shapes. A single engine
//! (`builder`) interprets these descriptors, so adding an endpoint is a
//! table entry rather than new code.

use crate::http::HttpMethod;

/// A positional parameter embedded in the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParam {
    /// Canonical snake_case name.
    pub name: &'static str,
    /// camelCase synonym; the canonical spelling wins when both are given.
    pub alias: Option<&'static str>,
}

impl PathParam {
    pub const fn new(name: &'static str) -> Self {
        Self { name, alias: None }
    }

    pub const fn aliased(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias: Some(alias),
        }
    }
}

/// One piece of a URL path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    /// Canonical name of a path parameter; rendered percent-encoded.
    Param(&'static str),
}

/// How the default verb is chosen when the caller does not override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodRule {
    Always(HttpMethod),
    ByBody { without: HttpMethod, with: HttpMethod },
}

impl MethodRule {
    pub fn resolve(self, has_body: bool) -> HttpMethod {
        match self {
            MethodRule::Always(method) => method,
            MethodRule::ByBody { without, with } => {
                if has_body {
                    with
                } else {
                    without
                }
            }
        }
    }
}

/// A URL template guarded by the path parameters it needs.
///
/// Shapes are tried in order; the first whose `when` parameters are all
/// present wins. A shape with an empty `when` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathShape {
    pub when: &'static [&'static str],
    pub segments: &'static [Segment],
    pub method: MethodRule,
}

/// What the endpoint does with `body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// No body; assembled as `null` even if one was passed.
    None,
    Json,
    /// Newline-delimited JSON (`_bulk`, `_msearch`).
    Ndjson,
}

/// Static description of one REST operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Dotted API name, e.g. `indices.stats`.
    pub name: &'static str,
    pub description: &'static str,
    pub documentation: &'static str,
    pub path_params: &'static [PathParam],
    /// Checked in order; the first missing one is reported.
    pub required: &'static [&'static str],
    /// `(param, needs)`: when `param` is given, every name in `needs` must be too.
    pub url_components: &'static [(&'static str, &'static [&'static str])],
    pub accepted_query: &'static [&'static str],
    /// `(camelCase, snake_case)` pairs.
    pub aliases: &'static [(&'static str, &'static str)],
    pub body: BodyKind,
    pub shapes: &'static [PathShape],
}

impl Endpoint {
    pub fn path_param(&self, name: &str) -> Option<&PathParam> {
        self.path_params.iter().find(|p| p.name == name)
    }

    pub fn accepts_query(&self, key: &str) -> bool {
        self.accepted_query.contains(&key)
    }

    /// Canonical key for a camelCase alias.
    pub fn canonical_for(&self, alias: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|(camel, _)| *camel == alias)
            .map(|(_, snake)| *snake)
    }
}
