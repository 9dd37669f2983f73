//! In-memory TTL cache for the profile document.
//!
//! Holds at most one entry. Entries are replaced wholesale and never removed,
//! so a failed reload leaves the last good document in place.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::RwLock;

/// Browser cache lifetime, also used as the in-memory TTL.
pub const PROFILE_MAX_AGE: Duration = Duration::from_secs(300);

/// HTTP caching details for a served document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheMetadata {
    pub max_age: Duration,
    pub etag: String,
    pub loaded_at: DateTime<Utc>,
}

impl CacheMetadata {
    pub fn for_load(loaded_at: DateTime<Utc>, max_age: Duration) -> Self {
        Self {
            max_age,
            etag: etag_for(loaded_at),
            loaded_at,
        }
    }

    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.max_age.as_secs())
    }

    /// Whether an `If-None-Match` header value names this version.
    pub fn matches(&self, if_none_match: &str) -> bool {
        if_none_match.split(',').map(str::trim).any(|candidate| {
            candidate == "*" || candidate.trim_start_matches("W/") == self.etag
        })
    }
}

/// Quoted load timestamp in milliseconds. Changes on every reload and is
/// stable in between.
pub fn etag_for(loaded_at: DateTime<Utc>) -> String {
    format!("\"{:x}\"", loaded_at.timestamp_millis())
}

/// A loaded document and the moment it was read.
#[derive(Debug, Clone)]
pub struct CachedProfile {
    pub document: Arc<Value>,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ProfileCache {
    ttl: Duration,
    entry: RwLock<Option<CachedProfile>>,
}

impl Default for ProfileCache {
    fn default() -> Self {
        Self::new(PROFILE_MAX_AGE)
    }
}

impl ProfileCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// The cached entry if it is younger than the TTL at `now`. An entry
    /// stamped after `now` counts as fresh.
    pub async fn fresh(&self, now: DateTime<Utc>) -> Option<CachedProfile> {
        let guard = self.entry.read().await;
        let entry = guard.as_ref()?;

        let age = (now - entry.loaded_at).to_std().unwrap_or(Duration::ZERO);
        if age < self.ttl {
            Some(entry.clone())
        } else {
            None
        }
    }

    /// The cached entry regardless of age.
    pub async fn peek(&self) -> Option<CachedProfile> {
        self.entry.read().await.clone()
    }

    /// Replace the entry. Concurrent refills race and the last write wins.
    pub async fn store(&self, document: Arc<Value>, loaded_at: DateTime<Utc>) -> CachedProfile {
        let entry = CachedProfile {
            document,
            loaded_at,
        };
        *self.entry.write().await = Some(entry.clone());
        entry
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[tokio::test]
    async fn test_empty_cache_has_nothing_fresh() {
        let cache = ProfileCache::default();
        assert!(cache.fresh(at(0)).await.is_none());
        assert!(cache.peek().await.is_none());
    }

    #[tokio::test]
    async fn test_entry_fresh_until_ttl() {
        let cache = ProfileCache::new(Duration::from_secs(300));
        cache.store(Arc::new(json!({"a": 1})), at(0)).await;

        assert!(cache.fresh(at(0)).await.is_some());
        assert!(cache.fresh(at(299)).await.is_some());
        assert!(cache.fresh(at(300)).await.is_none());
        assert!(cache.fresh(at(1_000)).await.is_none());
        // Stale entries stay readable.
        assert!(cache.peek().await.is_some());
    }

    #[tokio::test]
    async fn test_entry_from_the_future_is_fresh() {
        let cache = ProfileCache::default();
        cache.store(Arc::new(json!({"a": 1})), at(100)).await;

        assert!(cache.fresh(at(50)).await.is_some());
    }

    #[tokio::test]
    async fn test_store_replaces_entry() {
        let cache = ProfileCache::default();
        cache.store(Arc::new(json!({"v": 1})), at(0)).await;
        cache.store(Arc::new(json!({"v": 2})), at(10)).await;

        let entry = cache.fresh(at(11)).await.unwrap();
        assert_eq!(*entry.document, json!({"v": 2}));
        assert_eq!(entry.loaded_at, at(10));
    }

    #[test]
    fn test_metadata_headers() {
        let meta = CacheMetadata::for_load(at(0), PROFILE_MAX_AGE);
        assert_eq!(meta.cache_control(), "public, max-age=300");
        assert!(meta.etag.starts_with('"') && meta.etag.ends_with('"'));
        assert_eq!(meta.etag, etag_for(at(0)));
        assert_ne!(meta.etag, etag_for(at(1)));
    }

    #[test]
    fn test_if_none_match() {
        let meta = CacheMetadata::for_load(at(0), PROFILE_MAX_AGE);
        let etag = meta.etag.clone();

        assert!(meta.matches(&etag));
        assert!(meta.matches(&format!("W/{etag}")));
        assert!(meta.matches(&format!("\"other\", {etag}")));
        assert!(meta.matches("*"));
        assert!(!meta.matches("\"other\""));
    }
}
