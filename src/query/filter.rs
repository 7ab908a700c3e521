//! Structured boolean filter sent to the external vector database.

use serde::{Deserialize, Serialize};

use crate::query::types::FilterValue;

/// A single field condition in a structured filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Matches documents whose field equals any of the given values.
    AnyOf {
        /// Payload key to match against.
        key: String,
        /// Accepted values.
        values: Vec<String>,
    },
    /// Matches documents whose field equals the given value exactly.
    Equals {
        /// Payload key to match against.
        key: String,
        /// Value to match.
        value: FilterValue,
    },
    /// Matches documents whose field lies within the inclusive range
    /// `[gte, lte]`.
    Range {
        /// Payload key to match against.
        key: String,
        /// Inclusive lower bound.
        gte: f64,
        /// Inclusive upper bound.
        lte: f64,
    },
}

impl Condition {
    /// Create an any-of condition.
    pub fn any_of<K: Into<String>>(key: K, values: Vec<String>) -> Self {
        Condition::AnyOf {
            key: key.into(),
            values,
        }
    }

    /// Create an exact-match condition.
    pub fn equals<K: Into<String>, V: Into<FilterValue>>(key: K, value: V) -> Self {
        Condition::Equals {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an inclusive range condition.
    pub fn range<K: Into<String>>(key: K, gte: f64, lte: f64) -> Self {
        Condition::Range {
            key: key.into(),
            gte,
            lte,
        }
    }

    /// Get the payload key this condition applies to.
    pub fn key(&self) -> &str {
        match self {
            Condition::AnyOf { key, .. }
            | Condition::Equals { key, .. }
            | Condition::Range { key, .. } => key,
        }
    }
}

/// A boolean AND-conjunction of field conditions.
///
/// Constructed fresh per query and owned solely by the caller that
/// requested it. An empty conjunction is a valid filter that constrains
/// nothing; "no filter at all" is modeled as `Option<Filter>` at the
/// translation boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Conditions that must all match.
    pub must: Vec<Condition>,
}

impl Filter {
    /// Create a new filter with an empty conjunction.
    pub fn new() -> Self {
        Filter { must: Vec::new() }
    }

    /// Create a filter from the given conditions.
    pub fn with_must(must: Vec<Condition>) -> Self {
        Filter { must }
    }

    /// Append a condition to the conjunction.
    pub fn add_must(&mut self, condition: Condition) {
        self.must.push(condition);
    }

    /// Get the number of conditions.
    pub fn len(&self) -> usize {
        self.must.len()
    }

    /// Check if the conjunction is empty.
    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
    }
}
