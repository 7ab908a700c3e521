//! Types for query specifications and metadata filters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SagittaError};

/// A metadata filter value.
///
/// The target filter language supports exactly three value types, and the
/// variant fully determines the translated predicate kind: strings and
/// integers become exact-match conditions, floats become an inclusive range
/// with both bounds equal to the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A float value.
    Float(f64),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Str(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

/// A single metadata filter clause: a key matched against a typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataFilter {
    /// Payload key the filter applies to.
    pub key: String,
    /// Value to match.
    pub value: FilterValue,
}

impl MetadataFilter {
    /// Create a new metadata filter.
    pub fn new<K: Into<String>, V: Into<FilterValue>>(key: K, value: V) -> Self {
        MetadataFilter {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Build a metadata filter from a dynamic JSON value.
    ///
    /// This is the boundary where loosely-typed values enter the typed
    /// filter language. Only strings and numbers are representable; null,
    /// boolean, array, and object values fail with
    /// [`SagittaError::UnsupportedFilterValue`] naming the offending key.
    pub fn from_json<K: Into<String>>(key: K, value: &serde_json::Value) -> Result<Self> {
        let key = key.into();
        let value = match value {
            serde_json::Value::String(s) => FilterValue::Str(s.clone()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FilterValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    FilterValue::Float(f)
                } else {
                    return Err(SagittaError::unsupported_filter_value(key, "number"));
                }
            }
            other => {
                return Err(SagittaError::unsupported_filter_value(
                    key,
                    json_type_name(other),
                ));
            }
        };

        Ok(MetadataFilter { key, value })
    }
}

/// An ordered collection of metadata filter clauses.
///
/// Clause order is preserved through translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataFilters {
    /// The clauses, in the order they were given.
    pub filters: Vec<MetadataFilter>,
}

impl MetadataFilters {
    /// Create a new collection from the given clauses.
    pub fn new(filters: Vec<MetadataFilter>) -> Self {
        MetadataFilters { filters }
    }

    /// Append a clause.
    pub fn push(&mut self, filter: MetadataFilter) {
        self.filters.push(filter);
    }

    /// Get the number of clauses.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if there are no clauses.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// A generic query specification built by the caller.
///
/// Holds the structured constraints the filter translator reads (document
/// ids and metadata filters), the free-text query string, and the retrieval
/// parameters the hybrid caller threads through to its search calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorStoreQuery {
    /// Free-text query string, if any.
    pub query_str: Option<String>,
    /// Document ids to restrict the search to, matched via any-of. An empty
    /// list behaves exactly like `None`.
    pub doc_ids: Option<Vec<String>>,
    /// Metadata filter clauses, if any.
    pub filters: Option<MetadataFilters>,
    /// Number of results to return from the dense search.
    pub similarity_top_k: usize,
    /// Weight given to dense scores during fusion, if overriding the default.
    pub alpha: Option<f32>,
}

impl Default for VectorStoreQuery {
    fn default() -> Self {
        VectorStoreQuery {
            query_str: None,
            doc_ids: None,
            filters: None,
            similarity_top_k: 1,
            alpha: None,
        }
    }
}

impl VectorStoreQuery {
    /// Create an empty query specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query string.
    pub fn with_query_str<S: Into<String>>(mut self, query_str: S) -> Self {
        self.query_str = Some(query_str.into());
        self
    }

    /// Set the document id constraint.
    pub fn with_doc_ids(mut self, doc_ids: Vec<String>) -> Self {
        self.doc_ids = Some(doc_ids);
        self
    }

    /// Set the metadata filter clauses.
    pub fn with_filters(mut self, filters: MetadataFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the number of results to return from the dense search.
    pub fn with_similarity_top_k(mut self, similarity_top_k: usize) -> Self {
        self.similarity_top_k = similarity_top_k;
        self
    }

    /// Set the dense weight used during fusion.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

/// Human-readable name of a JSON value's type, for error messages.
fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
