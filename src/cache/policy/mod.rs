//! Eviction Policies
//!
//! A policy observes every insert and access on a [`Cache`](crate::cache::Cache)
//! and names the key to discard once the store grows past its capacity.

mod lru;
mod unbounded;

pub use lru::LruPolicy;
pub use unbounded::Unbounded;

// == Eviction Policy Trait ==
/// Strategy deciding which entry leaves a cache on overflow.
///
/// Adding a policy (LFU, TTL, ...) means implementing this trait; the
/// [`Cache`](crate::cache::Cache) itself does not change.
pub trait EvictionPolicy<K> {
    /// Called after `key` has been inserted or overwritten.
    fn on_insert(&mut self, key: &K);

    /// Called after a successful lookup of `key`.
    fn on_access(&mut self, key: &K);

    /// Returns the key to discard when a store of `len` entries is over
    /// capacity, forgetting it. At most one key is returned per call.
    fn evict_if_needed(&mut self, len: usize) -> Option<K>;

    /// Maximum number of entries, or `None` when unbounded.
    fn capacity(&self) -> Option<usize>;
}
