//! Configuration Module
//!
//! Loads cache and pagination settings from environment variables.

use std::env;

use crate::cache::DEFAULT_CAPACITY;
use crate::error::{Error, Result};
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Default number of rows in the generated demo dataset.
pub const DEFAULT_DATASET_ROWS: usize = 25;

/// Runtime configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries an LRU cache holds
    pub cache_capacity: usize,
    /// Rows per page when paginating
    pub page_size: usize,
    /// Number of rows in the demo dataset
    pub dataset_rows: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Values that fail to parse fall back to their defaults; out-of-range
    /// values are reported as errors.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - LRU capacity (default: 4)
    /// - `PAGE_SIZE` - Rows per page (default: 10)
    /// - `DATASET_ROWS` - Demo dataset size (default: 25)
    pub fn from_env() -> Result<Self> {
        let config = Self {
            cache_capacity: parse_var("CACHE_CAPACITY").unwrap_or(DEFAULT_CAPACITY),
            page_size: parse_var("PAGE_SIZE").unwrap_or(DEFAULT_PAGE_SIZE),
            dataset_rows: parse_var("DATASET_ROWS").unwrap_or(DEFAULT_DATASET_ROWS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(Error::InvalidConfig(
                "CACHE_CAPACITY must be greater than 0".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(Error::InvalidConfig(
                "PAGE_SIZE must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            page_size: DEFAULT_PAGE_SIZE,
            dataset_rows: DEFAULT_DATASET_ROWS,
        }
    }
}

fn parse_var(name: &str) -> Option<usize> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
