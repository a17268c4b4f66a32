//! Mini Cache - In-memory key/value caches and dataset pagination
//!
//! Provides an unbounded basic cache and a bounded LRU cache sharing one
//! pluggable eviction-policy design, plus page-based slicing of a dataset
//! with hypermedia navigation metadata.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;

pub use cache::{BasicCache, Cache, EvictionPolicy, LruCache};
pub use config::Config;
pub use error::{Error, Result};
pub use pagination::Paginator;
