//! The endpoint descriptor table, grouped by API namespace.
//!
//! Each namespace module holds `'static` `Endpoint` values; `ENDPOINTS` lists
//! them all so callers can dispatch by dotted name.

pub mod async_search;
pub mod cluster;
pub mod indices;
pub mod ml;
pub mod nodes;
pub mod root;

use crate::endpoint::Endpoint;

/// Every known endpoint, sorted by name.
pub static ENDPOINTS: &[&Endpoint] = &[
    &async_search::SUBMIT,
    &root::BULK,
    &cluster::HEALTH,
    &root::COUNT,
    &root::DELETE,
    &root::GET,
    &root::INDEX,
    &indices::CREATE,
    &indices::DELETE,
    &indices::EXISTS,
    &indices::GET_SETTINGS,
    &indices::REFRESH,
    &indices::STATS,
    &root::INFO,
    &ml::DELETE_TRAINED_MODEL,
    &ml::GET_TRAINED_MODELS,
    &nodes::HOT_THREADS,
    &nodes::STATS,
    &root::PING,
    &root::SEARCH,
    &root::SEARCH_TEMPLATE,
    &root::UPDATE,
    &root::UPDATE_BY_QUERY,
];

/// Look an endpoint up by its dotted name, e.g. `indices.stats`.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().copied().find(|endpoint| endpoint.name == name)
}
