//! Endpoint catalog: normalized API documentation and lexical search.

pub mod endpoint;
pub mod search;
