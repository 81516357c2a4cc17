//! Document and search APIs that live at the root of the namespace.

use crate::endpoint::MethodRule::{Always, ByBody};
use crate::endpoint::Segment::{Literal, Param};
use crate::endpoint::{BodyKind, Endpoint, PathParam, PathShape};
use crate::http::HttpMethod::{Delete, Get, Head, Post, Put};

const GET_OR_POST: crate::endpoint::MethodRule = ByBody {
    without: Get,
    with: Post,
};

pub static BULK: Endpoint = Endpoint {
    name: "bulk",
    description: "Allows to perform multiple index/update/delete operations in a single request.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/docs-bulk.html",
    path_params: &[PathParam::new("index"), PathParam::new("type")],
    required: &["body"],
    url_components: &[("type", &["index"])],
    accepted_query: &[
        "wait_for_active_shards",
        "refresh",
        "routing",
        "timeout",
        "_source",
        "_source_excludes",
        "_source_exclude",
        "_source_includes",
        "_source_include",
        "pipeline",
        "require_alias",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("waitForActiveShards", "wait_for_active_shards"),
        ("_sourceExcludes", "_source_excludes"),
        ("_sourceExclude", "_source_exclude"),
        ("_sourceIncludes", "_source_includes"),
        ("_sourceInclude", "_source_include"),
        ("requireAlias", "require_alias"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::Ndjson,
    shapes: &[
        PathShape {
            when: &["index", "type"],
            segments: &[Param("index"), Param("type"), Literal("_bulk")],
            method: Always(Post),
        },
        PathShape {
            when: &["index"],
            segments: &[Param("index"), Literal("_bulk")],
            method: Always(Post),
        },
        PathShape {
            when: &[],
            segments: &[Literal("_bulk")],
            method: Always(Post),
        },
    ],
};

pub static COUNT: Endpoint = Endpoint {
    name: "count",
    description: "Returns number of documents matching a query.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/search-count.html",
    path_params: &[PathParam::new("index"), PathParam::new("type")],
    required: &[],
    url_components: &[("type", &["index"])],
    accepted_query: &[
        "ignore_unavailable",
        "ignore_throttled",
        "allow_no_indices",
        "expand_wildcards",
        "min_score",
        "preference",
        "routing",
        "q",
        "analyzer",
        "analyze_wildcard",
        "default_operator",
        "df",
        "lenient",
        "terminate_after",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("ignoreUnavailable", "ignore_unavailable"),
        ("ignoreThrottled", "ignore_throttled"),
        ("allowNoIndices", "allow_no_indices"),
        ("expandWildcards", "expand_wildcards"),
        ("minScore", "min_score"),
        ("analyzeWildcard", "analyze_wildcard"),
        ("defaultOperator", "default_operator"),
        ("terminateAfter", "terminate_after"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::Json,
    shapes: &[
        PathShape {
            when: &["index", "type"],
            segments: &[Param("index"), Param("type"), Literal("_count")],
            method: GET_OR_POST,
        },
        PathShape {
            when: &["index"],
            segments: &[Param("index"), Literal("_count")],
            method: GET_OR_POST,
        },
        PathShape {
            when: &[],
            segments: &[Literal("_count")],
            method: GET_OR_POST,
        },
    ],
};

pub static DELETE: Endpoint = Endpoint {
    name: "delete",
    description: "Removes a document from the index.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/docs-delete.html",
    path_params: &[PathParam::new("id"), PathParam::new("index"), PathParam::new("type")],
    required: &["id", "index"],
    url_components: &[],
    accepted_query: &[
        "wait_for_active_shards",
        "refresh",
        "routing",
        "timeout",
        "if_seq_no",
        "if_primary_term",
        "version",
        "version_type",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("waitForActiveShards", "wait_for_active_shards"),
        ("ifSeqNo", "if_seq_no"),
        ("ifPrimaryTerm", "if_primary_term"),
        ("versionType", "version_type"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[
        PathShape {
            when: &["index", "type", "id"],
            segments: &[Param("index"), Param("type"), Param("id")],
            method: Always(Delete),
        },
        PathShape {
            when: &[],
            segments: &[Param("index"), Literal("_doc"), Param("id")],
            method: Always(Delete),
        },
    ],
};

pub static GET: Endpoint = Endpoint {
    name: "get",
    description: "Returns a document.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/docs-get.html",
    path_params: &[PathParam::new("id"), PathParam::new("index"), PathParam::new("type")],
    required: &["id", "index"],
    url_components: &[],
    accepted_query: &[
        "preference",
        "realtime",
        "refresh",
        "routing",
        "stored_fields",
        "_source",
        "_source_excludes",
        "_source_exclude",
        "_source_includes",
        "_source_include",
        "version",
        "version_type",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("storedFields", "stored_fields"),
        ("_sourceExcludes", "_source_excludes"),
        ("_sourceExclude", "_source_exclude"),
        ("_sourceIncludes", "_source_includes"),
        ("_sourceInclude", "_source_include"),
        ("versionType", "version_type"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::None,
    shapes: &[
        PathShape {
            when: &["index", "type", "id"],
            segments: &[Param("index"), Param("type"), Param("id")],
            method: Always(Get),
        },
        PathShape {
            when: &[],
            segments: &[Param("index"), Literal("_doc"), Param("id")],
            method: Always(Get),
        },
    ],
};

pub static INDEX: Endpoint = Endpoint {
    name: "index",
    description: "Creates or updates a document in an index.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/docs-index_.html",
    path_params: &[PathParam::new("id"), PathParam::new("index"), PathParam::new("type")],
    required: &["index", "body"],
    url_components: &[],
    accepted_query: &[
        "wait_for_active_shards",
        "op_type",
        "refresh",
        "routing",
        "timeout",
        "version",
        "version_type",
        "if_seq_no",
        "if_primary_term",
        "pipeline",
        "require_alias",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("waitForActiveShards", "wait_for_active_shards"),
        ("opType", "op_type"),
        ("versionType", "version_type"),
        ("ifSeqNo", "if_seq_no"),
        ("ifPrimaryTerm", "if_primary_term"),
        ("requireAlias", "require_alias"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::Json,
    shapes: &[
        PathShape {
            when: &["index", "type", "id"],
            segments: &[Param("index"), Param("type"), Param("id")],
            method: Always(Put),
        },
        PathShape {
            when: &["index", "id"],
            segments: &[Param("index"), Literal("_doc"), Param("id")],
            method: Always(Put),
        },
        PathShape {
            when: &["index", "type"],
            segments: &[Param("index"), Param("type")],
            method: Always(Post),
        },
        PathShape {
            when: &[],
            segments: &[Param("index"), Literal("_doc")],
            method: Always(Post),
        },
    ],
};

const COMMON_ONLY: &[&str] = &["pretty", "human", "error_trace", "source", "filter_path"];
const COMMON_ALIASES: &[(&str, &str)] = &[("errorTrace", "error_trace"), ("filterPath", "filter_path")];

pub static INFO: Endpoint = Endpoint {
    name: "info",
    description: "Returns basic information about the cluster.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/current/index.html",
    path_params: &[],
    required: &[],
    url_components: &[],
    accepted_query: COMMON_ONLY,
    aliases: COMMON_ALIASES,
    body: BodyKind::None,
    shapes: &[PathShape {
        when: &[],
        segments: &[],
        method: Always(Get),
    }],
};

pub static PING: Endpoint = Endpoint {
    name: "ping",
    description: "Returns whether the cluster is running.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/current/index.html",
    path_params: &[],
    required: &[],
    url_components: &[],
    accepted_query: COMMON_ONLY,
    aliases: COMMON_ALIASES,
    body: BodyKind::None,
    shapes: &[PathShape {
        when: &[],
        segments: &[],
        method: Always(Head),
    }],
};

pub static SEARCH: Endpoint = Endpoint {
    name: "search",
    description: "Returns results matching a query.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/search-search.html",
    path_params: &[PathParam::new("index"), PathParam::new("type")],
    required: &[],
    url_components: &[("type", &["index"])],
    accepted_query: &[
        "analyzer",
        "analyze_wildcard",
        "ccs_minimize_roundtrips",
        "default_operator",
        "df",
        "explain",
        "stored_fields",
        "docvalue_fields",
        "from",
        "ignore_unavailable",
        "ignore_throttled",
        "allow_no_indices",
        "expand_wildcards",
        "lenient",
        "preference",
        "q",
        "routing",
        "scroll",
        "search_type",
        "size",
        "sort",
        "_source",
        "_source_excludes",
        "_source_exclude",
        "_source_includes",
        "_source_include",
        "terminate_after",
        "stats",
        "suggest_field",
        "suggest_mode",
        "suggest_size",
        "suggest_text",
        "timeout",
        "track_scores",
        "track_total_hits",
        "allow_partial_search_results",
        "typed_keys",
        "version",
        "seq_no_primary_term",
        "request_cache",
        "batched_reduce_size",
        "max_concurrent_shard_requests",
        "pre_filter_shard_size",
        "rest_total_hits_as_int",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("analyzeWildcard", "analyze_wildcard"),
        ("ccsMinimizeRoundtrips", "ccs_minimize_roundtrips"),
        ("defaultOperator", "default_operator"),
        ("storedFields", "stored_fields"),
        ("docvalueFields", "docvalue_fields"),
        ("ignoreUnavailable", "ignore_unavailable"),
        ("ignoreThrottled", "ignore_throttled"),
        ("allowNoIndices", "allow_no_indices"),
        ("expandWildcards", "expand_wildcards"),
        ("searchType", "search_type"),
        ("_sourceExcludes", "_source_excludes"),
        ("_sourceExclude", "_source_exclude"),
        ("_sourceIncludes", "_source_includes"),
        ("_sourceInclude", "_source_include"),
        ("terminateAfter", "terminate_after"),
        ("suggestField", "suggest_field"),
        ("suggestMode", "suggest_mode"),
        ("suggestSize", "suggest_size"),
        ("suggestText", "suggest_text"),
        ("trackScores", "track_scores"),
        ("trackTotalHits", "track_total_hits"),
        ("allowPartialSearchResults", "allow_partial_search_results"),
        ("typedKeys", "typed_keys"),
        ("seqNoPrimaryTerm", "seq_no_primary_term"),
        ("requestCache", "request_cache"),
        ("batchedReduceSize", "batched_reduce_size"),
        ("maxConcurrentShardRequests", "max_concurrent_shard_requests"),
        ("preFilterShardSize", "pre_filter_shard_size"),
        ("restTotalHitsAsInt", "rest_total_hits_as_int"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::Json,
    shapes: &[
        PathShape {
            when: &["index", "type"],
            segments: &[Param("index"), Param("type"), Literal("_search")],
            method: GET_OR_POST,
        },
        PathShape {
            when: &["index"],
            segments: &[Param("index"), Literal("_search")],
            method: GET_OR_POST,
        },
        PathShape {
            when: &[],
            segments: &[Literal("_search")],
            method: GET_OR_POST,
        },
    ],
};

pub static SEARCH_TEMPLATE: Endpoint = Endpoint {
    name: "search_template",
    description: "Allows to use the Mustache language to pre-render a search definition.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-template.html",
    path_params: &[PathParam::new("index")],
    required: &["body"],
    url_components: &[],
    accepted_query: &[
        "ignore_unavailable",
        "ignore_throttled",
        "allow_no_indices",
        "expand_wildcards",
        "preference",
        "routing",
        "scroll",
        "search_type",
        "explain",
        "profile",
        "typed_keys",
        "rest_total_hits_as_int",
        "ccs_minimize_roundtrips",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("ignoreUnavailable", "ignore_unavailable"),
        ("ignoreThrottled", "ignore_throttled"),
        ("allowNoIndices", "allow_no_indices"),
        ("expandWildcards", "expand_wildcards"),
        ("searchType", "search_type"),
        ("typedKeys", "typed_keys"),
        ("restTotalHitsAsInt", "rest_total_hits_as_int"),
        ("ccsMinimizeRoundtrips", "ccs_minimize_roundtrips"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::Json,
    shapes: &[
        PathShape {
            when: &["index"],
            segments: &[Param("index"), Literal("_search"), Literal("template")],
            method: GET_OR_POST,
        },
        PathShape {
            when: &[],
            segments: &[Literal("_search"), Literal("template")],
            method: GET_OR_POST,
        },
    ],
};

pub static UPDATE: Endpoint = Endpoint {
    name: "update",
    description: "Updates a document with a script or partial document.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/docs-update.html",
    path_params: &[PathParam::new("id"), PathParam::new("index"), PathParam::new("type")],
    required: &["id", "index", "body"],
    url_components: &[],
    accepted_query: &[
        "wait_for_active_shards",
        "_source",
        "_source_excludes",
        "_source_exclude",
        "_source_includes",
        "_source_include",
        "lang",
        "refresh",
        "retry_on_conflict",
        "routing",
        "timeout",
        "if_seq_no",
        "if_primary_term",
        "require_alias",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("waitForActiveShards", "wait_for_active_shards"),
        ("_sourceExcludes", "_source_excludes"),
        ("_sourceExclude", "_source_exclude"),
        ("_sourceIncludes", "_source_includes"),
        ("_sourceInclude", "_source_include"),
        ("retryOnConflict", "retry_on_conflict"),
        ("ifSeqNo", "if_seq_no"),
        ("ifPrimaryTerm", "if_primary_term"),
        ("requireAlias", "require_alias"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::Json,
    shapes: &[
        PathShape {
            when: &["index", "type", "id"],
            segments: &[Param("index"), Param("type"), Param("id"), Literal("_update")],
            method: Always(Post),
        },
        PathShape {
            when: &[],
            segments: &[Param("index"), Literal("_update"), Param("id")],
            method: Always(Post),
        },
    ],
};

pub static UPDATE_BY_QUERY: Endpoint = Endpoint {
    name: "update_by_query",
    description: "Performs an update on every document in the index without changing the source, \
                  for example to pick up a mapping change.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/master/docs-update-by-query.html",
    path_params: &[PathParam::new("index")],
    required: &["index"],
    url_components: &[],
    accepted_query: &[
        "analyzer",
        "analyze_wildcard",
        "default_operator",
        "df",
        "from",
        "ignore_unavailable",
        "allow_no_indices",
        "conflicts",
        "expand_wildcards",
        "lenient",
        "pipeline",
        "preference",
        "q",
        "routing",
        "scroll",
        "search_type",
        "search_timeout",
        "max_docs",
        "sort",
        "_source",
        "_source_excludes",
        "_source_exclude",
        "_source_includes",
        "_source_include",
        "terminate_after",
        "stats",
        "version",
        "version_type",
        "request_cache",
        "refresh",
        "timeout",
        "wait_for_active_shards",
        "scroll_size",
        "wait_for_completion",
        "requests_per_second",
        "slices",
        "pretty",
        "human",
        "error_trace",
        "source",
        "filter_path",
    ],
    aliases: &[
        ("analyzeWildcard", "analyze_wildcard"),
        ("defaultOperator", "default_operator"),
        ("ignoreUnavailable", "ignore_unavailable"),
        ("allowNoIndices", "allow_no_indices"),
        ("expandWildcards", "expand_wildcards"),
        ("searchType", "search_type"),
        ("searchTimeout", "search_timeout"),
        ("maxDocs", "max_docs"),
        ("_sourceExcludes", "_source_excludes"),
        ("_sourceExclude", "_source_exclude"),
        ("_sourceIncludes", "_source_includes"),
        ("_sourceInclude", "_source_include"),
        ("terminateAfter", "terminate_after"),
        ("versionType", "version_type"),
        ("requestCache", "request_cache"),
        ("waitForActiveShards", "wait_for_active_shards"),
        ("scrollSize", "scroll_size"),
        ("waitForCompletion", "wait_for_completion"),
        ("requestsPerSecond", "requests_per_second"),
        ("errorTrace", "error_trace"),
        ("filterPath", "filter_path"),
    ],
    body: BodyKind::Json,
    shapes: &[PathShape {
        when: &[],
        segments: &[Param("index"), Literal("_update_by_query")],
        method: Always(Post),
    }],
};
