//! Fusion of dense and sparse search results.
//!
//! This module merges two independently ranked result lists — one from a
//! dense (embedding similarity) search and one from a sparse (keyword)
//! search — into a single ranked, capped list:
//! - Each input list's scores are min-max normalized to a common scale
//! - Normalized scores are combined as a weighted sum per document id
//! - Configurable weighting between the two retrieval paths

pub mod config;
pub mod merger;
pub mod types;

pub use config::FusionConfig;
pub use merger::{ResultFuser, relative_score_fusion};
pub use types::QueryResults;
