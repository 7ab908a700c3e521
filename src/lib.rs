//! # Sagitta
//!
//! The ranking and query-translation core of a hybrid vector search client.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Translation of generic query specifications into structured boolean
//!   filters for an external vector database
//! - Relative score fusion of dense (embedding) and sparse (keyword)
//!   result sets into a single ranked list
//! - No I/O, no async, no shared state: both components are pure functions
//!   over their arguments

pub mod document;
pub mod error;
pub mod fusion;
pub mod query;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
