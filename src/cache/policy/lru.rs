//! LRU Policy Module
//!
//! Least Recently Used tracking for bounded caches.

use std::collections::HashMap;
use std::hash::Hash;

use super::EvictionPolicy;
use crate::cache::DEFAULT_CAPACITY;
use crate::error::{Error, Result};

/// Link in the recency list. Neighbours are slot indices into `nodes`.
#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU Policy ==
/// Tracks access order for LRU eviction.
///
/// Keys live in a doubly-linked list threaded through a slab of nodes,
/// with a hash index from key to slot:
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// Touch and eviction are both O(1).
#[derive(Debug, Clone)]
pub struct LruPolicy<K> {
    /// Key to slot lookup
    index: HashMap<K, usize>,
    /// Node slab; `None` marks a free slot
    nodes: Vec<Option<Node<K>>>,
    /// Free slots available for reuse
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Maximum number of tracked entries
    capacity: usize,
}

impl<K> LruPolicy<K>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty policy holding at most `capacity` keys.
    ///
    /// Fails with [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self::with_valid_capacity(capacity))
    }

    fn with_valid_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity + 1),
            nodes: Vec::with_capacity(capacity + 1),
            free: Vec::new(),
            head: None,
            tail: None,
            capacity,
        }
    }

    // == Touch ==
    /// Marks a key as most recently used, tracking it if new.
    pub fn touch(&mut self, key: &K) {
        if let Some(&idx) = self.index.get(key) {
            self.move_to_front(idx);
            return;
        }

        let idx = self.alloc(Node {
            key: key.clone(),
            prev: None,
            next: None,
        });
        self.push_front(idx);
        self.index.insert(key.clone(), idx);
    }

    // == Evict Oldest ==
    /// Returns and forgets the least recently used key.
    ///
    /// Returns None if nothing is tracked.
    pub fn evict_oldest(&mut self) -> Option<K> {
        let idx = self.tail?;
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free.push(idx);
        self.index.remove(&node.key);
        Some(node.key)
    }

    // == Iter ==
    /// Iterates over tracked keys from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.node(cursor?)?;
            cursor = node.next;
            Some(&node.key)
        })
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == List plumbing ==
    fn node(&self, idx: usize) -> Option<&Node<K>> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    fn alloc(&mut self, node: Node<K>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.nodes[p].as_mut() {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.nodes[n].as_mut() {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.nodes[idx].as_mut() {
            node.prev = None;
            node.next = None;
        }
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.nodes[idx].as_mut() {
            node.prev = None;
            node.next = old_head;
        }
        if let Some(h) = old_head {
            if let Some(node) = self.nodes[h].as_mut() {
                node.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.unlink(idx);
        self.push_front(idx);
    }
}

impl<K> Default for LruPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::with_valid_capacity(DEFAULT_CAPACITY)
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn on_insert(&mut self, key: &K) {
        self.touch(key);
    }

    fn on_access(&mut self, key: &K) {
        if let Some(&idx) = self.index.get(key) {
            self.move_to_front(idx);
        }
    }

    fn evict_if_needed(&mut self, len: usize) -> Option<K> {
        if len > self.capacity {
            self.evict_oldest()
        } else {
            None
        }
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }
}
