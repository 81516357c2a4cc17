//! `indices.*` APIs.

use crate::endpoint::MethodRule::{Always, ByBody};
use crate::endpoint::Segment::{Literal, Param};
use crate::endpoint::{BodyKind, Endpoint, PathParam, PathShape};
use crate::http::HttpMethod::{Delete, Get, Head, Post, Put};

pub static CREATE: Endpoint = Endpoint {
    name: "indices.create",
    description: "Creates an index with optional settings and mappings.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/indices-create-index.html",
    path_params: &[PathParam::new("index")],
    required: &["index"],
    url_components: &[],
    accepted_query: &[
        "include_type_name",
        "wait_for_active_shards",
        "timeout",
        "master_timeout",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("includeTypeName", "include_type_name"),
        ("waitForActiveShards", "wait_for_active_shards"),
        ("masterTimeout", "master_timeout"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::Json,
    shapes: &[PathShape {
        when: &[],
        segments: &[Param("index")],
        method: Always(Put),
    }],
};

pub static DELETE: Endpoint = Endpoint {
    name: "indices.delete",
    description: "Deletes an index.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/indices-delete-index.html",
    path_params: &[PathParam::new("index")],
    required: &["index"],
    url_components: &[],
    accepted_query: &[
        "timeout",
        "master_timeout",
        "ignore_unavailable",
        "allow_no_indices",
        "expand_wildcards",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("masterTimeout", "master_timeout"),
        ("ignoreUnavailable", "ignore_unavailable"),
        ("allowNoIndices", "allow_no_indices"),
        ("expandWildcards", "expand_wildcards"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[PathShape {
        when: &[],
        segments: &[Param("index")],
        method: Always(Delete),
    }],
};

pub static EXISTS: Endpoint = Endpoint {
    name: "indices.exists",
    description: "Returns information about whether a particular index exists.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/indices-exists.html",
    path_params: &[PathParam::new("index")],
    required: &["index"],
    url_components: &[],
    accepted_query: &[
        "local",
        "ignore_unavailable",
        "allow_no_indices",
        "expand_wildcards",
        "flat_settings",
        "include_defaults",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("ignoreUnavailable", "ignore_unavailable"),
        ("allowNoIndices", "allow_no_indices"),
        ("expandWildcards", "expand_wildcards"),
        ("flatSettings", "flat_settings"),
        ("includeDefaults", "include_defaults"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[PathShape {
        when: &[],
        segments: &[Param("index")],
        method: Always(Head),
    }],
};

pub static GET_SETTINGS: Endpoint = Endpoint {
    name: "indices.get_settings",
    description: "Returns settings for one or more indices.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/indices-get-settings.html",
    path_params: &[PathParam::new("index"), PathParam::new("name")],
    required: &[],
    url_components: &[],
    accepted_query: &[
        "master_timeout",
        "ignore_unavailable",
        "allow_no_indices",
        "expand_wildcards",
        "flat_settings",
        "local",
        "include_defaults",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("masterTimeout", "master_timeout"),
        ("ignoreUnavailable", "ignore_unavailable"),
        ("allowNoIndices", "allow_no_indices"),
        ("expandWildcards", "expand_wildcards"),
        ("flatSettings", "flat_settings"),
        ("includeDefaults", "include_defaults"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[
        PathShape {
            when: &["index", "name"],
            segments: &[Param("index"), Literal("_settings"), Param("name")],
            method: Always(Get),
        },
        PathShape {
            when: &["index"],
            segments: &[Param("index"), Literal("_settings")],
            method: Always(Get),
        },
        PathShape {
            when: &["name"],
            segments: &[Literal("_settings"), Param("name")],
            method: Always(Get),
        },
        PathShape {
            when: &[],
            segments: &[Literal("_settings")],
            method: Always(Get),
        },
    ],
};

pub static REFRESH: Endpoint = Endpoint {
    name: "indices.refresh",
    description: "Performs the refresh operation in one or more indices.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/indices-refresh.html",
    path_params: &[PathParam::new("index")],
    required: &[],
    url_components: &[],
    accepted_query: &[
        "ignore_unavailable",
        "allow_no_indices",
        "expand_wildcards",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("ignoreUnavailable", "ignore_unavailable"),
        ("allowNoIndices", "allow_no_indices"),
        ("expandWildcards", "expand_wildcards"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[
        PathShape {
            when: &["index"],
            segments: &[Param("index"), Literal("_refresh")],
            method: ByBody {
                without: Get,
                with: Post,
            },
        },
        PathShape {
            when: &[],
            segments: &[Literal("_refresh")],
            method: ByBody {
                without: Get,
                with: Post,
            },
        },
    ],
};

pub static STATS: Endpoint = Endpoint {
    name: "indices.stats",
    description: "Provides statistics on operations happening in an index.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/indices-stats.html",
    path_params: &[PathParam::new("metric"), PathParam::new("index")],
    required: &[],
    url_components: &[],
    accepted_query: &[
        "completion_fields",
        "fielddata_fields",
        "fields",
        "groups",
        "level",
        "types",
        "include_segment_file_sizes",
        "include_unloaded_segments",
        "expand_wildcards",
        "forbid_closed_indices",
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
        ("includeUnloadedSegments", "include_unloaded_segments"),
        ("expandWildcards", "expand_wildcards"),
        ("forbidClosedIndices", "forbid_closed_indices"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[
        PathShape {
            when: &["index", "metric"],
            segments: &[Param("index"), Literal("_stats"), Param("metric")],
            method: Always(Get),
        },
        PathShape {
            when: &["metric"],
            segments: &[Literal("_stats"), Param("metric")],
            method: Always(Get),
        },
        PathShape {
            when: &["index"],
            segments: &[Param("index"), Literal("_stats")],
            method: Always(Get),
        },
        PathShape {
            when: &[],
            segments: &[Literal("_stats")],
            method: Always(Get),
        },
    ],
};
