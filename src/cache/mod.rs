//! Cache Module
//!
//! In-memory key/value caches with a pluggable eviction policy: an unbounded
//! basic cache and a bounded LRU cache.

mod engine;
pub mod policy;
mod stats;
mod store;


// Re-export public types
pub use engine::{BasicCache, Cache, DiscardListener, LruCache};
pub use policy::{EvictionPolicy, LruPolicy, Unbounded};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Capacity of an LRU cache built without an explicit one
pub const DEFAULT_CAPACITY: usize = 4;
