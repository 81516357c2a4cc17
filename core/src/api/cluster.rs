//! `cluster.*` APIs.

use crate::endpoint::MethodRule::Always;
use crate::endpoint::Segment::{Literal, Param};
use crate::endpoint::{BodyKind, Endpoint, PathParam, PathShape};
use crate::http::HttpMethod::Get;

pub static HEALTH: Endpoint = Endpoint {
    name: "cluster.health",
    description: "Returns basic information about the health of the cluster.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/cluster-health.html",
    path_params: &[PathParam::new("index")],
    required: &[],
    url_components: &[],
    accepted_query: &[
        "expand_wildcards",
        "level",
        "local",
        "master_timeout",
        "timeout",
        "wait_for_active_shards",
        "wait_for_nodes",
        "wait_for_events",
        "wait_for_no_relocating_shards",
        "wait_for_no_initializing_shards",
        "wait_for_status",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("expandWildcards", "expand_wildcards"),
        ("masterTimeout", "master_timeout"),
        ("waitForActiveShards", "wait_for_active_shards"),
        ("waitForNodes", "wait_for_nodes"),
        ("waitForEvents", "wait_for_events"),
        ("waitForNoRelocatingShards", "wait_for_no_relocating_shards"),
        ("waitForNoInitializingShards", "wait_for_no_initializing_shards"),
        ("waitForStatus", "wait_for_status"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[
        PathShape {
            when: &["index"],
            segments: &[Literal("_cluster"), Literal("health"), Param("index")],
            method: Always(Get),
        },
        PathShape {
            when: &[],
            segments: &[Literal("_cluster"), Literal("health")],
            method: Always(Get),
        },
    ],
};
