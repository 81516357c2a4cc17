//! `async_search.*` APIs.

use crate::endpoint::MethodRule::Always;
use crate::endpoint::Segment::{Literal, Param};
use crate::endpoint::{BodyKind, Endpoint, PathParam, PathShape};
use crate::http::HttpMethod::Post;

pub static SUBMIT: Endpoint = Endpoint {
    name: "async_search.submit",
    description: "Executes a search request asynchronously.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/current/async-search.html",
    path_params: &[PathParam::new("index")],
    required: &[],
    url_components: &[],
    accepted_query: &[
        "wait_for_completion_timeout",
        "keep_on_completion",
        "keep_alive",
        "batched_reduce_size",
        "request_cache",
        "analyzer",
        "analyze_wildcard",
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
        "max_concurrent_shard_requests",
    ],
    aliases: &[
        ("waitForCompletionTimeout", "wait_for_completion_timeout"),
        ("keepOnCompletion", "keep_on_completion"),
        ("keepAlive", "keep_alive"),
        ("batchedReduceSize", "batched_reduce_size"),
        ("requestCache", "request_cache"),
        ("analyzeWildcard", "analyze_wildcard"),
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
        ("maxConcurrentShardRequests", "max_concurrent_shard_requests"),
    ],
    body: BodyKind::Json,
    shapes: &[
        PathShape {
            when: &["index"],
            segments: &[Param("index"), Literal("_async_search")],
            method: Always(Post),
        },
        PathShape {
            when: &[],
            segments: &[Literal("_async_search")],
            method: Always(Post),
        },
    ],
};
