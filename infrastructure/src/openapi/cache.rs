//! In-memory endpoint cache
//!
//! Holds the normalized endpoints of every dynamically loaded provider for
//! the lifetime of the process. Entries are immutable once stored: a reload
//! builds a fresh [`CacheEntry`] and swaps it in whole, so readers either
//! see the previous complete entry or the new complete entry, never a
//! partially written list.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use specscout_domain::EndpointRecord;
use tracing::info;

/// One provider's cached spec: its endpoints plus load provenance.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub endpoints: Vec<EndpointRecord>,
    pub source_url: String,
    pub loaded_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Look up a single endpoint by its `provider:path:METHOD` id.
    pub fn find(&self, endpoint_id: &str) -> Option<&EndpointRecord> {
        self.endpoints.iter().find(|e| e.id == endpoint_id)
    }
}

/// Thread-safe cache of loaded providers, keyed by provider name.
///
/// The lock only guards the pointer map; endpoint lists are built outside
/// the lock and shared behind `Arc`, so both `put` and `get` hold the lock
/// for O(1) work.
#[derive(Debug, Default)]
pub struct SpecCache {
    entries: RwLock<HashMap<String, Arc<CacheEntry>>>,
}

impl SpecCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a provider's endpoints, replacing any previous entry whole.
    pub fn put(
        &self,
        provider: impl Into<String>,
        endpoints: Vec<EndpointRecord>,
        source_url: impl Into<String>,
    ) {
        let provider = provider.into();
        let entry = Arc::new(CacheEntry {
            endpoints,
            source_url: source_url.into(),
            loaded_at: Utc::now(),
        });
        info!(
            "Cached {} endpoints for provider '{}'",
            entry.endpoints.len(),
            provider
        );
        self.entries.write().unwrap().insert(provider, entry);
    }

    /// Fetch a provider's current entry, if loaded.
    pub fn get(&self, provider: &str) -> Option<Arc<CacheEntry>> {
        self.entries.read().unwrap().get(provider).cloned()
    }

    /// Names of every loaded provider, sorted for stable listings.
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specscout_domain::HttpMethod;

    fn record(provider: &str, path: &str, method: HttpMethod) -> EndpointRecord {
        EndpointRecord::new(provider, path, method).rendered()
    }

    #[test]
    fn test_put_then_get() {
        let cache = SpecCache::new();
        cache.put(
            "petstore",
            vec![record("petstore", "/pets", HttpMethod::Get)],
            "https://example.com/openapi.json",
        );

        let entry = cache.get("petstore").unwrap();
        assert_eq!(entry.endpoints.len(), 1);
        assert_eq!(entry.source_url, "https://example.com/openapi.json");
        assert!(entry.find("petstore:/pets:GET").is_some());
        assert!(entry.find("petstore:/pets:POST").is_none());
    }

    #[test]
    fn test_get_unknown_provider_is_none() {
        let cache = SpecCache::new();
        assert!(cache.get("never-loaded").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_reload_replaces_not_merges() {
        let cache = SpecCache::new();
        cache.put(
            "svc",
            vec![
                record("svc", "/old-a", HttpMethod::Get),
                record("svc", "/old-b", HttpMethod::Get),
            ],
            "https://example.com/v1.json",
        );
        cache.put(
            "svc",
            vec![record("svc", "/new", HttpMethod::Post)],
            "https://example.com/v2.json",
        );

        let entry = cache.get("svc").unwrap();
        assert_eq!(entry.endpoints.len(), 1);
        assert!(entry.find("svc:/old-a:GET").is_none());
        assert!(entry.find("svc:/new:POST").is_some());
        assert_eq!(entry.source_url, "https://example.com/v2.json");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_entry_is_stable_until_replaced() {
        let cache = SpecCache::new();
        cache.put("svc", vec![record("svc", "/a", HttpMethod::Get)], "u1");

        let before = cache.get("svc").unwrap();
        let again = cache.get("svc").unwrap();
        assert!(Arc::ptr_eq(&before, &again));

        cache.put("svc", vec![record("svc", "/b", HttpMethod::Get)], "u2");
        let after = cache.get("svc").unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        // The old handle still reads the old list.
        assert!(before.find("svc:/a:GET").is_some());
        assert!(after.find("svc:/b:GET").is_some());
    }

    #[test]
    fn test_provider_names_are_sorted() {
        let cache = SpecCache::new();
        cache.put("zebra", vec![], "u1");
        cache.put("alpha", vec![], "u2");
        cache.put("mango", vec![], "u3");
        assert_eq!(cache.provider_names(), vec!["alpha", "mango", "zebra"]);
    }

    #[test]
    fn test_concurrent_puts_land_for_both_providers() {
        let cache = Arc::new(SpecCache::new());
        std::thread::scope(|scope| {
            let a = Arc::clone(&cache);
            let b = Arc::clone(&cache);
            scope.spawn(move || {
                for _ in 0..100 {
                    a.put("one", vec![record("one", "/a", HttpMethod::Get)], "u1");
                }
            });
            scope.spawn(move || {
                for _ in 0..100 {
                    b.put("two", vec![record("two", "/b", HttpMethod::Get)], "u2");
                }
            });
        });
        assert_eq!(cache.len(), 2);
        assert!(cache.get("one").is_some());
        assert!(cache.get("two").is_some());
    }
}
