//! Translation of query specifications into structured filters.

use crate::query::filter::{Condition, Filter};
use crate::query::types::{FilterValue, VectorStoreQuery};

/// Payload key under which document ids are stored in the vector database.
pub const DOC_ID_KEY: &str = "doc_id";

/// Translate a query specification into a structured boolean filter.
///
/// Returns `None` only when the query carries no document ids, no metadata
/// filters, and no free-text string: no filter concept applies at all. A
/// query that carries only a free-text string produces a filter with an
/// empty conjunction, signaling that a filter container was requested but
/// constrains nothing.
///
/// Document ids translate to a single any-of condition on [`DOC_ID_KEY`],
/// emitted first. Metadata clauses follow in the order given: string and
/// integer values become exact-match conditions, float values become an
/// inclusive range with both bounds equal to the value. The target
/// predicate language has no native float equality operator, so the
/// degenerate range encoding is the contract.
///
/// Pure function of its input; no side effects.
pub fn build_query_filter(query: &VectorStoreQuery) -> Option<Filter> {
    let doc_ids = query.doc_ids.as_deref().unwrap_or(&[]);
    let clauses = query
        .filters
        .as_ref()
        .map_or(&[] as &[_], |f| f.filters.as_slice());

    if doc_ids.is_empty() && clauses.is_empty() && query.query_str.is_none() {
        return None;
    }

    let mut filter = Filter::new();

    if !doc_ids.is_empty() {
        filter.add_must(Condition::any_of(DOC_ID_KEY, doc_ids.to_vec()));
    }

    for clause in clauses {
        let condition = match &clause.value {
            FilterValue::Str(s) => Condition::equals(clause.key.as_str(), s.clone()),
            FilterValue::Int(i) => Condition::equals(clause.key.as_str(), *i),
            FilterValue::Float(v) => Condition::range(clause.key.as_str(), *v, *v),
        };
        filter.add_must(condition);
    }

    Some(filter)
}
