// TTL Cache
// Keeps contract lookups (draw details, profiles) for a short time so that
// re-renders and polling do not hit the RPC node for every read.

use std::{future::Future, hash::Hash, num::NonZeroUsize, sync::Arc, time::Duration};

use log::{debug, log_enabled, Level};
use lru::LruCache;
use tokio::{sync::RwLock, time::Instant};

use crate::{
    address::Address,
    config::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL},
    draw::DrawDetails,
};

/// Entry in the cache
struct CacheEntry<V> {
    value: V,
    /// When this entry was added
    inserted_at: Instant,
}

/// Bounded cache where every entry also expires after a fixed TTL.
///
/// The least recently used entry is evicted once the capacity is reached.
/// Expired entries are dropped when read or through [`TtlCache::purge_expired`].
/// Cloning is cheap and every clone shares the same entries.
pub struct TtlCache<K: Hash + Eq, V> {
    /// LRU cache of entries
    cache: Arc<RwLock<LruCache<K, CacheEntry<V>>>>,
    /// Maximum time to keep entries before eviction
    ttl: Duration,
}

/// Draw details by draw id
pub type DrawCache = TtlCache<u64, DrawDetails>;

/// Profile metadata by account address
pub type ProfileCache<V> = TtlCache<Address, V>;

impl<K: Hash + Eq + Clone, V: Clone> TtlCache<K, V> {
    /// Create a new cache
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, 0 uses the default capacity
    /// * `ttl` - Maximum time to keep an entry
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn is_expired(&self, entry: &CacheEntry<V>) -> bool {
        entry.inserted_at.elapsed() >= self.ttl
    }

    /// Retrieve a value from the cache
    ///
    /// Returns None if not found or if the entry has expired
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.cache.write().await;

        let expired = match cache.get(key) {
            Some(entry) if !self.is_expired(entry) => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            cache.pop(key);
            debug!("Cache entry expired");
        }

        None
    }

    /// Insert a value, replacing and returning any previous live value
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        let mut cache = self.cache.write().await;
        let entry = CacheEntry {
            value,
            inserted_at: Instant::now(),
        };

        cache
            .put(key, entry)
            .filter(|previous| !self.is_expired(previous))
            .map(|previous| previous.value)
    }

    /// Remove a value, returning it if it was still live
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut cache = self.cache.write().await;
        cache
            .pop(key)
            .filter(|entry| !self.is_expired(entry))
            .map(|entry| entry.value)
    }

    /// Check if a live entry exists, without touching the LRU order
    pub async fn contains(&self, key: &K) -> bool {
        let cache = self.cache.read().await;
        cache
            .peek(key)
            .is_some_and(|entry| !self.is_expired(entry))
    }

    /// Get the value from the cache or load it on a miss.
    ///
    /// The lock is released while `load` runs, so two concurrent misses on
    /// the same key may both call their loader; the last insert wins.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: K, load: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key).await {
            return Ok(value);
        }

        let value = load().await?;
        self.insert(key, value.clone()).await;
        Ok(value)
    }

    /// Drop every expired entry, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let mut cache = self.cache.write().await;
        let expired: Vec<K> = cache
            .iter()
            .filter(|(_, entry)| self.is_expired(entry))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            cache.pop(key);
        }

        if log_enabled!(Level::Debug) && !expired.is_empty() {
            debug!("Purged {} expired cache entries", expired.len());
        }

        expired.len()
    }

    /// Number of entries, expired ones included until purged
    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.len()
    }

    pub async fn is_empty(&self) -> bool {
        let cache = self.cache.read().await;
        cache.is_empty()
    }

    /// Clear the cache
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL)
    }
}

impl<K: Hash + Eq, V> Clone for TtlCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            ttl: self.ttl,
        }
    }
}
