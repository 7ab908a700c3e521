//! Document types carried through search results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An opaque content unit attached to a search result.
///
/// The core never inspects or mutates document content; it only carries
/// documents from the retrieval inputs to the fused output. Documents are
/// identified by a unique string id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document ID.
    pub id: String,
    /// Document content.
    pub content: String,
    /// Additional metadata.
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Create a new document with the given id and content.
    pub fn new<I: Into<String>, C: Into<String>>(id: I, content: C) -> Self {
        Document {
            id: id.into(),
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach metadata to this document.
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }
}
