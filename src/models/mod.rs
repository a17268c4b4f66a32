//! Data models
//!
//! Serializable shapes handed to callers of the pagination layer.

mod page;

pub use page::HyperPage;
