//! Lexical search and ranking over endpoint records.
//!
//! Scoring is intentionally simple and fully deterministic:
//!
//! | signal | points |
//! |--------|--------|
//! | full query is a substring of `path` | +10 |
//! | full query is a substring of `title` | +10 |
//! | query token (≥ 3 chars) in `path` | +3 |
//! | query token (≥ 3 chars) in `title` | +3 |
//! | query token (≥ 3 chars) in `description` | +2 |
//! | query token (≥ 3 chars) in any tag | +2 |
//!
//! All matching is case-insensitive. Endpoints scoring 0 are excluded from
//! results entirely. Ties keep the order the endpoints were loaded in.

use crate::catalog::endpoint::{EndpointRecord, HttpMethod};

/// Result count when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 10;

/// Upper bound on caller-supplied result counts.
pub const MAX_LIMIT: usize = 50;

/// Clamp a caller-supplied limit into `1..=MAX_LIMIT`, defaulting to
/// [`DEFAULT_LIMIT`] when absent.
pub fn clamp_limit(requested: Option<i64>) -> usize {
    match requested {
        Some(n) => n.clamp(1, MAX_LIMIT as i64) as usize,
        None => DEFAULT_LIMIT,
    }
}

/// An endpoint together with its relevance score for one query.
#[derive(Debug, Clone)]
pub struct RankedEndpoint<'a> {
    pub endpoint: &'a EndpointRecord,
    pub score: u32,
}

impl RankedEndpoint<'_> {
    /// Score scaled down for human display.
    pub fn relevance(&self) -> f64 {
        f64::from(self.score) / 10.0
    }
}

/// Score one endpoint against a free-text query.
pub fn score_endpoint(endpoint: &EndpointRecord, query: &str) -> u32 {
    let query_lower = query.to_lowercase();
    let path_lower = endpoint.path.to_lowercase();
    let title_lower = endpoint.title.to_lowercase();
    let description_lower = endpoint.description.to_lowercase();
    let tags_lower: Vec<String> = endpoint.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut score = 0;

    if path_lower.contains(&query_lower) {
        score += 10;
    }
    if title_lower.contains(&query_lower) {
        score += 10;
    }

    for token in query_lower
        .split_whitespace()
        .filter(|t| t.chars().count() >= 3)
    {
        if path_lower.contains(token) {
            score += 3;
        }
        if title_lower.contains(token) {
            score += 3;
        }
        if description_lower.contains(token) {
            score += 2;
        }
        if tags_lower.iter().any(|tag| tag.contains(token)) {
            score += 2;
        }
    }

    score
}

/// Filter, score and rank endpoints for a query.
///
/// Applies the method filter before scoring, drops zero scores, and sorts
/// descending by score with a stable sort so equal scores keep load order.
pub fn rank<'a>(
    endpoints: &'a [EndpointRecord],
    query: &str,
    method: Option<HttpMethod>,
) -> Vec<RankedEndpoint<'a>> {
    let mut ranked: Vec<RankedEndpoint<'a>> = endpoints
        .iter()
        .filter(|e| method.is_none_or(|m| e.method == m))
        .filter_map(|e| {
            let score = score_endpoint(e, query);
            (score > 0).then_some(RankedEndpoint { endpoint: e, score })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
