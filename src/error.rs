//! Error types for the crate
//!
//! Cache operations never fail; errors only come from construction,
//! configuration and pagination arguments.

use thiserror::Error;

// == Error Enum ==
/// Unified error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bounded cache created with a zero capacity
    #[error("Invalid capacity: {0} (must be greater than 0)")]
    InvalidCapacity(usize),

    /// Page numbers start at 1
    #[error("Invalid page: {0} (pages are 1-indexed)")]
    InvalidPage(usize),

    /// Page size must be positive
    #[error("Invalid page size: {0} (must be greater than 0)")]
    InvalidPageSize(usize),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;
