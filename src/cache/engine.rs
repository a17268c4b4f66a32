//! Cache Engine Module
//!
//! Binds a [`CacheStore`] to an [`EvictionPolicy`] and exposes `put`/`get`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, info, trace};

use crate::cache::policy::{EvictionPolicy, LruPolicy, Unbounded};
use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

/// Callback invoked with each entry the policy discards.
pub type DiscardListener<K, V> = Box<dyn FnMut(&K, &V) + Send>;

/// Cache that never evicts.
pub type BasicCache<K, V> = Cache<K, V, Unbounded>;

/// Bounded cache discarding the least recently used entry on overflow.
pub type LruCache<K, V> = Cache<K, V, LruPolicy<K>>;

// == Cache ==
/// Key/value cache parameterized over its eviction policy.
///
/// Both operations are total: a `put` with a missing key or value is
/// ignored, and a `get` of an unknown or missing key returns `None`.
pub struct Cache<K, V, P> {
    store: CacheStore<K, V>,
    policy: P,
    stats: CacheStats,
    on_discard: Option<DiscardListener<K, V>>,
}

impl<K, V, P> Cache<K, V, P>
where
    K: Hash + Eq + fmt::Display,
    P: EvictionPolicy<K>,
{
    // == Constructor ==
    /// Creates an empty cache driven by `policy`.
    pub fn with_policy(policy: P) -> Self {
        Self {
            store: CacheStore::new(),
            policy,
            stats: CacheStats::new(),
            on_discard: None,
        }
    }

    // == Discard Listener ==
    /// Registers a listener receiving every discarded entry (builder form).
    pub fn with_discard_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.set_discard_listener(listener);
        self
    }

    /// Registers a listener receiving every discarded entry, replacing any
    /// previous one.
    pub fn set_discard_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.on_discard = Some(Box::new(listener));
    }

    // == Put ==
    /// Inserts or overwrites an entry and marks it most recently used.
    ///
    /// If the store then exceeds the policy's capacity, exactly one entry is
    /// discarded and a `DISCARD: <key>` line is logged.
    pub fn put(&mut self, key: Option<K>, value: Option<V>) {
        let (key, value) = match (key, value) {
            (Some(key), Some(value)) => (key, value),
            (key, value) => {
                self.stats.record_rejected_put();
                debug!(
                    has_key = key.is_some(),
                    has_value = value.is_some(),
                    "ignoring put with missing key or value"
                );
                return;
            }
        };

        self.policy.on_insert(&key);
        self.store.insert(key, value);

        if let Some(evicted) = self.policy.evict_if_needed(self.store.len()) {
            self.discard(evicted);
        }
        self.stats.set_total_entries(self.store.len());
    }

    // == Get ==
    /// Retrieves a value by key, marking it most recently used.
    pub fn get<Q>(&mut self, key: Option<&Q>) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(key) = key else {
            self.stats.record_miss();
            trace!("lookup without key");
            return None;
        };

        match self.store.get_key_value(key) {
            Some((stored_key, value)) => {
                self.policy.on_access(stored_key);
                self.stats.record_hit();
                trace!(key = %stored_key, "cache hit");
                Some(value)
            }
            None => {
                self.stats.record_miss();
                trace!("cache miss");
                None
            }
        }
    }

    // == Contains ==
    /// Checks for a key without touching the recency order.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // == Capacity ==
    /// Maximum number of entries, or `None` for an unbounded cache.
    pub fn capacity(&self) -> Option<usize> {
        self.policy.capacity()
    }

    // == Policy ==
    /// Returns the eviction policy, e.g. to inspect recency order.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // == Iter ==
    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.store.iter()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.store.len());
        stats
    }

    // == Discard ==
    /// Drops an entry chosen by the policy and reports it.
    fn discard(&mut self, key: K) {
        let Some(value) = self.store.remove(&key) else {
            return;
        };

        info!("DISCARD: {}", key);
        self.stats.record_eviction();
        if let Some(listener) = self.on_discard.as_mut() {
            listener(&key, &value);
        }
    }
}

impl<K, V> Cache<K, V, Unbounded>
where
    K: Hash + Eq + fmt::Display,
{
    /// Creates an empty, unbounded cache.
    pub fn new() -> Self {
        Self::with_policy(Unbounded)
    }
}

impl<K, V> Default for Cache<K, V, Unbounded>
where
    K: Hash + Eq + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V, LruPolicy<K>>
where
    K: Hash + Eq + Clone + fmt::Display,
{
    /// Creates an empty LRU cache holding [`DEFAULT_CAPACITY`](crate::cache::DEFAULT_CAPACITY) entries.
    pub fn new() -> Self {
        Self::with_policy(LruPolicy::default())
    }

    /// Creates an empty LRU cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self::with_policy(LruPolicy::new(capacity)?))
    }
}

impl<K, V> Default for Cache<K, V, LruPolicy<K>>
where
    K: Hash + Eq + Clone + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P> fmt::Debug for Cache<K, V, P>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("store", &self.store)
            .field("policy", &self.policy)
            .field("stats", &self.stats)
            .field("on_discard", &self.on_discard.is_some())
            .finish()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::{BasicCache, LruCache};
    use crate::cache::DEFAULT_CAPACITY;
    use crate::error::Error;

    fn recency(cache: &LruCache<&'static str, &'static str>) -> Vec<&'static str> {
        cache.policy().iter().copied().collect()
    }

    /// In-memory sink for formatted log lines
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_basic_put_and_get() {
        let mut cache = BasicCache::new();

        cache.put(Some("A"), Some("Hello"));
        cache.put(Some("B"), Some("World"));

        assert_eq!(cache.get(Some(&"A")), Some(&"Hello"));
        assert_eq!(cache.get(Some(&"B")), Some(&"World"));
        assert_eq!(cache.get(Some(&"C")), None);
        assert_eq!(cache.capacity(), None);
    }

    #[test]
    fn test_basic_never_evicts() {
        let mut cache = BasicCache::new();

        for i in 0..(DEFAULT_CAPACITY * 10) {
            cache.put(Some(i), Some(i * 2));
        }

        assert_eq!(cache.len(), DEFAULT_CAPACITY * 10);
        assert_eq!(cache.stats().evictions, 0);
        for i in 0..(DEFAULT_CAPACITY * 10) {
            assert_eq!(cache.get(Some(&i)), Some(&(i * 2)));
        }
    }

    #[test]
    fn test_lru_default_capacity() {
        let cache: LruCache<String, String> = LruCache::new();
        assert_eq!(cache.capacity(), Some(4));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lru_with_zero_capacity() {
        let result = LruCache::<String, String>::with_capacity(0);
        assert!(matches!(result, Err(Error::InvalidCapacity(0))));
    }

    #[test]
    fn test_lru_evicts_oldest() {
        let mut cache = LruCache::new();

        for (key, value) in [("A", "Hello"), ("B", "World"), ("C", "Holberton"), ("D", "School")] {
            cache.put(Some(key), Some(value));
        }
        cache.put(Some("E"), Some("Battery"));

        assert_eq!(cache.len(), 4);
        assert!(!cache.contains_key(&"A"));
        assert_eq!(recency(&cache), vec!["E", "D", "C", "B"]);
    }

    #[test]
    fn test_lru_get_refreshes_recency() {
        let mut cache = LruCache::new();

        for key in ["A", "B", "C", "D"] {
            cache.put(Some(key), Some(key));
        }
        assert_eq!(cache.get(Some(&"A")), Some(&"A"));
        cache.put(Some("E"), Some("E"));

        assert!(cache.contains_key(&"A"));
        assert!(!cache.contains_key(&"B"));
    }

    #[test]
    fn test_lru_overwrite_refreshes_without_eviction() {
        let mut cache = LruCache::new();

        for key in ["A", "B", "C", "D"] {
            cache.put(Some(key), Some("old"));
        }
        cache.put(Some("A"), Some("new"));

        assert_eq!(cache.len(), 4);
        assert_eq!(cache.stats().evictions, 0);
        assert_eq!(recency(&cache), vec!["A", "D", "C", "B"]);
        assert_eq!(cache.get(Some(&"A")), Some(&"new"));
    }

    #[test]
    fn test_missing_key_or_value_is_ignored() {
        let mut cache = LruCache::new();

        cache.put(Some("A"), Some("a"));
        cache.put(None, Some("b"));
        cache.put(Some("B"), None);

        assert_eq!(cache.len(), 1);
        assert_eq!(recency(&cache), vec!["A"]);
        assert_eq!(cache.stats().rejected_puts, 2);
        assert_eq!(cache.get::<&str>(None), None);
    }

    #[test]
    fn test_miss_does_not_reorder() {
        let mut cache = LruCache::new();

        cache.put(Some("A"), Some("a"));
        cache.put(Some("B"), Some("b"));
        assert_eq!(cache.get(Some(&"Z")), None);

        assert_eq!(recency(&cache), vec!["B", "A"]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_discard_listener_receives_evictions() {
        let discarded = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&discarded);

        let mut cache = LruCache::with_capacity(2)
            .unwrap()
            .with_discard_listener(move |key: &u32, value: &String| {
                sink.lock().unwrap().push((*key, value.clone()));
            });

        for key in 1..=4u32 {
            cache.put(Some(key), Some(format!("v{}", key)));
        }

        assert_eq!(
            *discarded.lock().unwrap(),
            vec![(1, "v1".to_string()), (2, "v2".to_string())]
        );
        assert_eq!(cache.stats().evictions, 2);
    }

    #[test]
    fn test_discard_line_uses_plain_key() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut cache: LruCache<String, String> = LruCache::new();
            for key in ["A", "B", "C", "D", "E"] {
                cache.put(Some(key.to_string()), Some(key.to_lowercase()));
            }
        });

        let output = logs.contents();
        let discards: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("DISCARD"))
            .collect();
        assert_eq!(discards.len(), 1, "unexpected log output: {}", output);
        assert!(discards[0].trim_end().ends_with("DISCARD: A"), "got: {}", discards[0]);
        assert!(!output.contains('"'));
    }

    #[test]
    fn test_cache_can_be_shared_behind_a_lock() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<LruCache<String, String>>();
        assert_sync::<Mutex<LruCache<String, String>>>();
        assert_sync::<Mutex<BasicCache<u64, Vec<u8>>>>();

        let shared = Arc::new(Mutex::new(
            LruCache::with_capacity(3)
                .unwrap()
                .with_discard_listener(|_: &u32, _: &u32| {}),
        ));
        let handles: Vec<_> = (0..4u32)
            .map(|worker| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    for i in 0..25u32 {
                        shared.lock().unwrap().put(Some(worker * 100 + i), Some(i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let cache = shared.lock().unwrap();
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.stats().evictions, 97);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let mut cache = BasicCache::new();

        cache.put(Some("key".to_string()), Some(1));
        cache.get(Some("key"));
        cache.get(Some("missing"));
        cache.get::<str>(None);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.total_entries, 1);
    }
}
