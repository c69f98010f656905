//! Dynamic OpenAPI ingestion
//!
//! This module covers the load path for a provider: fetch the document
//! over HTTP ([`fetch`]), walk it into endpoint records ([`normalize`]),
//! and store the result for searching ([`cache`]).

pub mod cache;
pub mod fetch;
pub mod normalize;

pub use cache::{CacheEntry, SpecCache};
pub use fetch::{HttpSpecSource, StaticSpecSource};
pub use normalize::{NormalizeError, normalize};
