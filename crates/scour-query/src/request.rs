//! The structured search request and its predicate tree.

use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// One node of the boolean predicate tree sent to the search engine.
///
/// Leaf shapes are `match_all`, `range`, and `multi_match`; the only
/// non-leaf shape is `bool.must`, a conjunction whose sub-predicates are
/// all required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// Matches every document.
    MatchAll,
    /// Relative time-range bound on a timestamp field.
    Range {
        /// Timestamp field the bound applies to.
        field: String,
        /// Lower bound, e.g. `now-24h`.
        gte: String,
        /// Upper bound, always `now` for lookback queries.
        lte: String,
    },
    /// Full-text match over several fields.
    MultiMatch {
        /// The keyword string to match.
        query: String,
        /// Ordered fields to search.
        fields: Vec<String>,
    },
    /// Conjunction: every sub-predicate must hold.
    Bool {
        /// Required sub-predicates, in order.
        must: Vec<QueryNode>,
    },
}

impl QueryNode {
    /// A range clause covering the last `hours` hours on `field`.
    #[must_use]
    pub fn lookback(field: impl Into<String>, hours: u64) -> Self {
        Self::Range {
            field: field.into(),
            gte: format!("now-{hours}h"),
            lte: "now".to_string(),
        }
    }

    /// Whether this node is the permissive match-all clause.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        matches!(self, Self::MatchAll)
    }

    /// The engine-shaped JSON value for this predicate tree.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::MatchAll => json!({ "match_all": {} }),
            Self::Range { field, gte, lte } => {
                let mut bounds = serde_json::Map::new();
                bounds.insert(field.clone(), json!({ "gte": gte, "lte": lte }));
                json!({ "range": bounds })
            }
            Self::MultiMatch { query, fields } => json!({
                "multi_match": { "query": query, "fields": fields }
            }),
            Self::Bool { must } => {
                let clauses: Vec<Value> = must.iter().map(Self::to_value).collect();
                json!({ "bool": { "must": clauses } })
            }
        }
    }
}

impl Serialize for QueryNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// A compiled, engine-agnostic search request.
///
/// `collections` is always non-empty and only ever contains registered
/// names; `result_limit` is always within [1, 1000].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Collections to search, in resolution order.
    pub collections: Vec<String>,
    /// The boolean predicate tree.
    pub query: QueryNode,
    /// Result-size bound.
    pub result_limit: u32,
}

impl SearchRequest {
    /// The `_search` request body for the engine: size plus query tree.
    #[must_use]
    pub fn body(&self) -> Value {
        json!({
            "size": self.result_limit,
            "query": self.query.to_value(),
        })
    }
}
