//! `nodes.*` APIs.

use crate::endpoint::MethodRule::Always;
use crate::endpoint::Segment::{Literal, Param};
use crate::endpoint::{BodyKind, Endpoint, PathParam, PathShape};
use crate::http::HttpMethod::Get;

pub static HOT_THREADS: Endpoint = Endpoint {
    name: "nodes.hot_threads",
    description: "Returns information about hot threads on each node in the cluster.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/cluster-nodes-hot-threads.html",
    path_params: &[PathParam::aliased("node_id", "nodeId")],
    required: &[],
    url_components: &[],
    accepted_query: &[
        "interval",
        "snapshots",
        "threads",
        "ignore_idle_threads",
        "type",
        "timeout",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("ignoreIdleThreads", "ignore_idle_threads"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[
        PathShape {
            when: &["node_id"],
            segments: &[Literal("_nodes"), Param("node_id"), Literal("hot_threads")],
            method: Always(Get),
        },
        PathShape {
            when: &[],
            segments: &[Literal("_nodes"), Literal("hot_threads")],
            method: Always(Get),
        },
    ],
};

pub static STATS: Endpoint = Endpoint {
    name: "nodes.stats",
    description: "Returns statistical information about nodes in the cluster.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/cluster-nodes-stats.html",
    path_params: &[
        PathParam::aliased("node_id", "nodeId"),
        PathParam::new("metric"),
        PathParam::aliased("index_metric", "indexMetric"),
    ],
    required: &[],
    url_components: &[],
    accepted_query: &[
        "completion_fields",
        "fielddata_fields",
        "fields",
        "groups",
        "level",
        "types",
        "timeout",
        "include_segment_file_sizes",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("completionFields", "completion_fields"),
        ("fielddataFields", "fielddata_fields"),
        ("includeSegmentFileSizes", "include_segment_file_sizes"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[
        PathShape {
            when: &["node_id", "metric", "index_metric"],
            segments: &[
                Literal("_nodes"),
                Param("node_id"),
                Literal("stats"),
                Param("metric"),
                Param("index_metric"),
            ],
            method: Always(Get),
        },
        PathShape {
            when: &["node_id", "metric"],
            segments: &[Literal("_nodes"), Param("node_id"), Literal("stats"), Param("metric")],
            method: Always(Get),
        },
        PathShape {
            when: &["metric", "index_metric"],
            segments: &[Literal("_nodes"), Literal("stats"), Param("metric"), Param("index_metric")],
            method: Always(Get),
        },
        PathShape {
            when: &["node_id"],
            segments: &[Literal("_nodes"), Param("node_id"), Literal("stats")],
            method: Always(Get),
        },
        PathShape {
            when: &["metric"],
            segments: &[Literal("_nodes"), Literal("stats"), Param("metric")],
            method: Always(Get),
        },
        PathShape {
            when: &[],
            segments: &[Literal("_nodes"), Literal("stats")],
            method: Always(Get),
        },
    ],
};
