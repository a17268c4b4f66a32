//! Cache Store Module
//!
//! Raw key/value storage. Capacity is not enforced here; that is the
//! eviction policy's job.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

// == Cache Store ==
/// Key-value storage with null-sentinel aware `put`/`get`.
///
/// `None` plays the role of the null sentinel: a `put` with a missing key or
/// value is ignored, a `get` with a missing key is absent.
#[derive(Debug, Clone)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq,
{
    // == Constructor ==
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Put ==
    /// Inserts or overwrites an entry.
    ///
    /// Returns `false` without touching the store if either argument is `None`.
    pub fn put(&mut self, key: Option<K>, value: Option<V>) -> bool {
        match (key, value) {
            (Some(key), Some(value)) => {
                self.insert(key, value);
                true
            }
            _ => false,
        }
    }

    // == Insert ==
    /// Inserts or overwrites an entry, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    // == Get ==
    /// Retrieves a value by key. Absent for unknown keys and for `None`.
    pub fn get<Q>(&self, key: Option<&Q>) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        key.and_then(|key| self.entries.get(key))
    }

    // == Get Key Value ==
    /// Retrieves the stored key together with its value.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_key_value(key)
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }

    // == Contains ==
    /// Returns true if an entry exists for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Iter ==
    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K, V> Default for CacheStore<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}
