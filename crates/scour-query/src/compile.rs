//! Assembly of a parsed query into a structured search request.

use scour_registry::CollectionRegistry;
use tracing::debug;

use crate::request::{QueryNode, SearchRequest};
use crate::types::ParsedQuery;

/// Compiles a parsed query against the registry.
///
/// Targets default to every registered collection when the query named
/// none; names the registry does not know are dropped silently. The
/// compiled query is `match_all` exactly when neither a time filter nor a
/// keyword was extracted.
#[must_use]
pub fn compile(parsed: &ParsedQuery, registry: &CollectionRegistry) -> SearchRequest {
    let mut targets: Vec<String> = parsed
        .collections
        .iter()
        .flatten()
        .filter(|name| registry.contains(name))
        .cloned()
        .collect();
    if targets.is_empty() {
        targets = registry.names().into_iter().map(str::to_string).collect();
    }

    let mut must: Vec<QueryNode> = Vec::with_capacity(2);

    if let Some(hours) = parsed.lookback_hours {
        // All stock collections share one timestamp field name; the range
        // clause is keyed on the first target's field. Registries with
        // divergent timestamp fields would need per-collection sub-queries.
        if let Some(field) = registry.timestamp_field(&targets[0]) {
            must.push(QueryNode::lookback(field, hours));
        }
    }

    if let Some(keyword) = &parsed.keyword {
        let fields = registry.search_fields(&targets);
        must.push(QueryNode::MultiMatch {
            query: keyword.clone(),
            fields,
        });
    }

    let query = if must.is_empty() {
        QueryNode::MatchAll
    } else if must.len() == 1 {
        must.remove(0)
    } else {
        QueryNode::Bool { must }
    };

    debug!(
        collections = ?targets,
        match_all = query.is_match_all(),
        limit = parsed.result_limit,
        "query compiled"
    );

    SearchRequest {
        collections: targets,
        query,
        result_limit: parsed.result_limit,
    }
}
