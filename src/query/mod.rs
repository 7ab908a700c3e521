//! Query specifications and their translation into structured filters.
//!
//! This module holds the query-facing half of the core: the generic query
//! specification built by the caller ([`VectorStoreQuery`]), the typed
//! metadata filter language ([`FilterValue`], [`MetadataFilter`]), the
//! structured boolean filter consumed by the external vector database
//! ([`Filter`], [`Condition`]), and the translator between the two.

pub mod filter;
pub mod translator;
pub mod types;

pub use self::filter::{Condition, Filter};
pub use self::translator::{DOC_ID_KEY, build_query_filter};
pub use self::types::{FilterValue, MetadataFilter, MetadataFilters, VectorStoreQuery};
