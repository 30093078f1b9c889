//! In-memory key/value store with optional per-entry expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Shortest period [`TtlCache::spawn_janitor`] will sweep at.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    // None: never expires and is skipped by `sweep`.
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now <= at)
    }
}

/// A string-keyed cache whose value type is fixed at compile time.
///
/// Entries inserted with [`TtlCache::insert`] use the cache's default lifetime; a default
/// of `None` means entries live until explicitly removed. Expired entries are invisible
/// to readers immediately and are reclaimed by [`TtlCache::sweep`].
#[derive(Debug)]
pub struct TtlCache<V> {
    map: RwLock<HashMap<String, CacheEntry<V>>>,
    default_ttl: Option<Duration>,
}

impl<V: Clone> TtlCache<V> {
    /// Create an empty cache whose entries never expire unless given an explicit TTL.
    pub fn new() -> Self {
        Self::with_default_ttl(None)
    }

    /// Create an empty cache with the given default entry lifetime.
    pub fn with_default_ttl(default_ttl: Option<Duration>) -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }

    pub const fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    /// Return a copy of the live value stored under `key`.
    pub async fn get(&self, key: &str) -> Option<V> {
        let guard = self.map.read().await;
        guard
            .get(key)
            .filter(|e| e.is_live(Instant::now()))
            .map(|e| e.value.clone())
    }

    /// Insert using the default lifetime. Replaces any previous value.
    pub async fn insert(&self, key: impl Into<String>, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl).await;
    }

    /// Insert with an explicit lifetime; `None` never expires.
    pub async fn insert_with_ttl(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let entry = CacheEntry {
            value,
            expires_at: ttl.map(|t| Instant::now() + t),
        };
        let mut guard = self.map.write().await;
        guard.insert(key.into(), entry);
    }

    pub async fn remove(&self, key: &str) -> Option<V> {
        let mut guard = self.map.write().await;
        guard.remove(key).map(|e| e.value)
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.map.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.map.read().await.is_empty()
    }

    /// Drop every expired entry and return how many were removed.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut guard = self.map.write().await;
        let before = guard.len();
        guard.retain(|_, e| e.is_live(now));
        before - guard.len()
    }
}

impl<V: Clone + Send + Sync + 'static> TtlCache<V> {
    /// Run [`TtlCache::sweep`] every `interval` on the current tokio runtime.
    ///
    /// The task holds its own reference to the cache; abort the returned handle to stop it.
    /// A zero `interval` is raised to [`MIN_SWEEP_INTERVAL`].
    pub fn spawn_janitor(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let interval = interval.max(MIN_SWEEP_INTERVAL);
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = cache.sweep().await;
                if removed > 0 {
                    tracing::debug!(removed, "swept expired cache entries");
                }
            }
        })
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
