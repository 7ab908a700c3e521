//! Configuration for result fusion.

use serde::{Deserialize, Serialize};

/// Configuration for relative score fusion of dense and sparse results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Weight for normalized dense scores (0.0-1.0). Sparse scores receive
    /// `1.0 - dense_weight`.
    pub dense_weight: f32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self { dense_weight: 0.5 }
    }
}
