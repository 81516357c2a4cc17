//! Query-parameter normalization: camelCase aliases to canonical snake_case.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::endpoint::Endpoint;
use crate::params::Params;

/// Keep only the keys `endpoint` accepts, rewriting aliases to their
/// canonical name.
///
/// `bag` must already be stripped of path, body and method fields. Unknown
/// keys are dropped and reported in `warnings` rather than failing the call.
/// When a canonical key and one of its aliases are both present, the
/// canonical key wins regardless of iteration order. `null` values are
/// treated as absent.
pub fn normalize_query(endpoint: &Endpoint, bag: Params, warnings: &mut Vec<String>) -> BTreeMap<String, Value> {
    let mut query = BTreeMap::new();
    for (key, value) in bag {
        if value.is_null() {
            continue;
        }
        if endpoint.accepts_query(&key) {
            query.insert(key, value);
        } else if let Some(canonical) = endpoint.canonical_for(&key) {
            query.entry(canonical.to_string()).or_insert(value);
        } else {
            warn!(endpoint = endpoint.name, param = %key, "dropping unknown parameter");
            warnings.push(format!("Client - Unknown parameter: \"{key}\", dropping it"));
        }
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::indices::STATS;
    use serde_json::json;

    fn bag(value: Value) -> Params {
        Params::try_from(value).unwrap()
    }

    #[test]
    fn accepted_keys_pass_through() {
        let mut warnings = Vec::new();
        let query = normalize_query(&STATS, bag(json!({"level": "shards", "pretty": true})), &mut warnings);
        assert_eq!(query["level"], json!("shards"));
        assert_eq!(query["pretty"], json!(true));
        assert!(warnings.is_empty());
    }

    #[test]
    fn aliases_are_rewritten() {
        let mut warnings = Vec::new();
        let query = normalize_query(&STATS, bag(json!({"expandWildcards": "open"})), &mut warnings);
        assert_eq!(query.get("expand_wildcards"), Some(&json!("open")));
        assert!(!query.contains_key("expandWildcards"));
    }

    #[test]
    fn canonical_beats_alias_in_either_order() {
        let mut warnings = Vec::new();
        let query = normalize_query(
            &STATS,
            bag(json!({"expand_wildcards": "open", "expandWildcards": "closed"})),
            &mut warnings,
        );
        assert_eq!(query["expand_wildcards"], json!("open"));

        let mut reversed = Params::new();
        reversed.insert("expandWildcards", "closed");
        reversed.insert("expand_wildcards", "open");
        let query = normalize_query(&STATS, reversed, &mut warnings);
        assert_eq!(query["expand_wildcards"], json!("open"));
    }

    #[test]
    fn unknown_keys_are_dropped_with_warning() {
        let mut warnings = Vec::new();
        let query = normalize_query(&STATS, bag(json!({"foo": 1, "level": "indices"})), &mut warnings);
        assert!(!query.contains_key("foo"));
        assert_eq!(query.len(), 1);
        assert_eq!(warnings, vec!["Client - Unknown parameter: \"foo\", dropping it".to_string()]);
    }

    #[test]
    fn null_values_are_skipped_silently() {
        let mut warnings = Vec::new();
        let query = normalize_query(&STATS, bag(json!({"level": null, "bogus": null})), &mut warnings);
        assert!(query.is_empty());
        assert!(warnings.is_empty());
    }
}
