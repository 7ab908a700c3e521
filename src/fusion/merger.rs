//! Relative score fusion of dense and sparse search results.

use std::cmp::Ordering;

use ahash::AHashMap;

use crate::document::Document;
use crate::error::{Result, SagittaError};
use crate::fusion::config::FusionConfig;
use crate::fusion::types::QueryResults;

/// Result fuser combining dense and sparse search results.
///
/// Each input list's scores are min-max normalized independently, then
/// combined per document id as
/// `dense_weight * norm_dense + (1 - dense_weight) * norm_sparse`, where an
/// id absent from one list contributes zero for that term. The fuser holds
/// only its configuration; [`fuse`] reads nothing but its arguments and may
/// be called concurrently without coordination.
///
/// [`fuse`]: ResultFuser::fuse
#[derive(Debug, Clone, Default)]
pub struct ResultFuser {
    config: FusionConfig,
}

/// A distinct document id with its accumulated combined score.
struct Candidate<'a> {
    id: &'a str,
    score: f32,
    document: &'a Document,
}

impl ResultFuser {
    /// Create a new result fuser.
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    /// Fuse dense and sparse result sets into a single ranked list.
    ///
    /// Returns `Ok(None)` only when both inputs are empty, so callers can
    /// distinguish "no hybrid inputs at all" from "hybrid search
    /// legitimately returned nothing". Once fusion runs, the result is
    /// always `Some`, even when truncation leaves zero or one entries.
    ///
    /// On an id collision between the two lists the dense list's document
    /// is kept. Ties in combined score preserve the candidate order: dense
    /// ids in input order, then sparse-only ids in input order.
    ///
    /// # Errors
    ///
    /// - [`SagittaError::MalformedResultSet`] if either input violates the
    ///   equal-length invariant on its parallel sequences.
    /// - [`SagittaError::InvalidArgument`] if `top_k` is zero.
    pub fn fuse(
        &self,
        dense: &QueryResults,
        sparse: &QueryResults,
        top_k: usize,
    ) -> Result<Option<QueryResults>> {
        dense.validate("dense")?;
        sparse.validate("sparse")?;
        if top_k == 0 {
            return Err(SagittaError::invalid_argument(
                "top_k must be greater than zero",
            ));
        }

        if dense.is_empty() && sparse.is_empty() {
            return Ok(None);
        }

        let dense_norm = normalize(&dense.scores);
        let sparse_norm = normalize(&sparse.scores);

        let dense_weight = self.config.dense_weight;
        let sparse_weight = 1.0 - dense_weight;

        let capacity = dense.len() + sparse.len();
        let mut candidates: Vec<Candidate> = Vec::with_capacity(capacity);
        let mut positions: AHashMap<&str, usize> = AHashMap::with_capacity(capacity);

        for (i, id) in dense.ids.iter().enumerate() {
            match positions.get(id.as_str()) {
                Some(&pos) => candidates[pos].score += dense_weight * dense_norm[i],
                None => {
                    positions.insert(id.as_str(), candidates.len());
                    candidates.push(Candidate {
                        id: id.as_str(),
                        score: dense_weight * dense_norm[i],
                        document: &dense.documents[i],
                    });
                }
            }
        }

        for (i, id) in sparse.ids.iter().enumerate() {
            match positions.get(id.as_str()) {
                Some(&pos) => candidates[pos].score += sparse_weight * sparse_norm[i],
                None => {
                    positions.insert(id.as_str(), candidates.len());
                    candidates.push(Candidate {
                        id: id.as_str(),
                        score: sparse_weight * sparse_norm[i],
                        document: &sparse.documents[i],
                    });
                }
            }
        }

        // Stable sort: equal scores keep the candidate registration order.
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        candidates.truncate(top_k);

        let mut results = QueryResults::with_capacity(candidates.len());
        for candidate in candidates {
            results.push(candidate.id, candidate.score, candidate.document.clone());
        }

        Ok(Some(results))
    }
}

/// Fuse dense and sparse results with the default configuration (equal
/// weighting).
pub fn relative_score_fusion(
    dense: &QueryResults,
    sparse: &QueryResults,
    top_k: usize,
) -> Result<Option<QueryResults>> {
    ResultFuser::new(FusionConfig::default()).fuse(dense, sparse, top_k)
}

/// Min-max normalize a score list to `[0, 1]`.
///
/// A list with no internal spread (`max == min`, including the
/// single-element case) normalizes every score to `1.0`: a list that
/// cannot rank its own members is treated as maximally confident in all of
/// them.
fn normalize(scores: &[f32]) -> Vec<f32> {
    let Some((min, max)) = min_max(scores) else {
        return Vec::new();
    };
    let range = max - min;
    scores
        .iter()
        .map(|&score| {
            if range < f32::EPSILON {
                1.0
            } else {
                (score - min) / range
            }
        })
        .collect()
}

/// Single-pass min/max computation.
fn min_max(scores: &[f32]) -> Option<(f32, f32)> {
    if scores.is_empty() {
        return None;
    }
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for &score in scores {
        if score < min {
            min = score;
        }
        if score > max {
            max = score;
        }
    }
    Some((min, max))
}
