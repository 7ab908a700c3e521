//! Result set types used by fusion.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{Result, SagittaError};

/// A ranked result set: three parallel sequences of equal length.
///
/// Position `i` across `ids`, `scores`, and `documents` describes one
/// ranked hit. An empty set has length zero. "No result set at all" is
/// modeled as `Option<QueryResults>` at API boundaries — an empty set is
/// never overloaded to mean both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResults {
    /// Document ids, best match first.
    pub ids: Vec<String>,
    /// Similarity scores, parallel to `ids`.
    pub scores: Vec<f32>,
    /// Documents, parallel to `ids`.
    pub documents: Vec<Document>,
}

impl QueryResults {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty result set with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        QueryResults {
            ids: Vec::with_capacity(capacity),
            scores: Vec::with_capacity(capacity),
            documents: Vec::with_capacity(capacity),
        }
    }

    /// Create a result set from already-parallel sequences.
    ///
    /// The equal-length invariant is not checked here; [`validate`] is
    /// called at the fusion boundary.
    ///
    /// [`validate`]: QueryResults::validate
    pub fn from_parts(ids: Vec<String>, scores: Vec<f32>, documents: Vec<Document>) -> Self {
        QueryResults {
            ids,
            scores,
            documents,
        }
    }

    /// Append one hit, keeping the three columns aligned.
    pub fn push<I: Into<String>>(&mut self, id: I, score: f32, document: Document) {
        self.ids.push(id.into());
        self.scores.push(score);
        self.documents.push(document);
    }

    /// Get the number of hits.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the result set has no hits.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Enforce the equal-length invariant on the parallel sequences.
    ///
    /// `label` names the result set in the error message.
    pub fn validate(&self, label: &str) -> Result<()> {
        if self.ids.len() != self.scores.len() || self.ids.len() != self.documents.len() {
            return Err(SagittaError::malformed_result_set(format!(
                "{label} results: ids: {}, scores: {}, documents: {}",
                self.ids.len(),
                self.scores.len(),
                self.documents.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_columns_aligned() {
        let mut results = QueryResults::new();
        assert!(results.is_empty());

        results.push("1", 0.8, Document::new("1", "lorem ipsum"));
        results.push("2", 0.5, Document::new("2", "lorem ipsum"));

        assert_eq!(results.len(), 2);
        assert_eq!(results.ids, vec!["1", "2"]);
        assert_eq!(results.scores, vec![0.8, 0.5]);
        assert_eq!(results.documents[1].id, "2");
        assert!(results.validate("test").is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatched_columns() {
        let results = QueryResults::from_parts(
            vec!["1".to_string(), "2".to_string()],
            vec![0.8],
            vec![Document::new("1", "lorem ipsum")],
        );

        let err = results.validate("dense").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed result set: dense results: ids: 2, scores: 1, documents: 1"
        );
    }

    #[test]
    fn test_empty_set_is_valid() {
        let results = QueryResults::new();
        assert!(results.validate("sparse").is_ok());
        assert_eq!(results.len(), 0);
    }
}
