//! Mini Cache - demo driver
//!
//! Walks through the basic cache, the LRU cache and hypermedia pagination,
//! printing results to stdout. Logs go to stderr.
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Run the basic cache, LRU cache and pagination walkthroughs

use std::fmt;
use std::hash::Hash;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_cache::cache::{BasicCache, Cache, EvictionPolicy, LruCache};
use mini_cache::{Config, Paginator};

fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        "Configuration loaded: cache_capacity={}, page_size={}, dataset_rows={}",
        config.cache_capacity, config.page_size, config.dataset_rows
    );

    run_basic_cache();
    run_lru_cache(&config)?;
    run_pagination(&config)?;

    info!("Demo complete");
    Ok(())
}

fn run_basic_cache() {
    println!("== Basic cache ==");
    let mut cache = BasicCache::new();

    cache.put(Some("A"), Some("Hello"));
    cache.put(Some("B"), Some("World"));
    cache.put(Some("C"), Some("Holberton"));
    cache.put(Some("D"), Some("School"));
    print_cache(&cache);

    cache.put(Some("E"), Some("Battery"));
    cache.put(Some("C"), Some("Street"));
    cache.put(None, Some("Nothing"));
    cache.put(Some("F"), None);
    print_cache(&cache);

    for key in ["A", "C", "E", "F", "Z"] {
        println!("get({}) -> {:?}", key, cache.get(Some(&key)));
    }
}

fn run_lru_cache(config: &Config) -> Result<()> {
    println!("== LRU cache (capacity {}) ==", config.cache_capacity);
    let mut cache: LruCache<&str, &str> = LruCache::with_capacity(config.cache_capacity)?;
    cache.set_discard_listener(|key, _| println!("DISCARD: {}", key));

    cache.put(Some("A"), Some("Hello"));
    cache.put(Some("B"), Some("World"));
    cache.put(Some("C"), Some("Holberton"));
    cache.put(Some("D"), Some("School"));
    print_cache(&cache);

    println!("get(B) -> {:?}", cache.get(Some(&"B")));
    cache.put(Some("E"), Some("Battery"));
    print_cache(&cache);

    cache.put(Some("C"), Some("Street"));
    println!("get(A) -> {:?}", cache.get(Some(&"A")));
    println!("get(B) -> {:?}", cache.get(Some(&"B")));
    println!("get(C) -> {:?}", cache.get(Some(&"C")));
    cache.put(Some("F"), Some("Mission"));
    cache.put(Some("G"), Some("San Francisco"));
    cache.put(Some("H"), Some("H"));
    cache.put(Some("I"), Some("I"));
    print_cache(&cache);

    let stats = serde_json::to_string(&cache.stats()).context("failed to render stats")?;
    println!("stats: {}", stats);
    Ok(())
}

/// One row of the synthetic dataset
#[derive(Debug, Serialize)]
struct Row {
    id: usize,
    name: String,
}

fn run_pagination(config: &Config) -> Result<()> {
    println!("== Hypermedia pagination ==");
    let rows = (1..=config.dataset_rows)
        .map(|id| Row {
            id,
            name: format!("row-{:03}", id),
        })
        .collect();
    let paginator = Paginator::new(rows);
    info!(rows = paginator.len(), page_size = config.page_size, "dataset ready");
    let last_page = paginator.total_pages(config.page_size)?.max(1);

    // Rendered pages, keyed by page number
    let mut pages: LruCache<usize, String> = LruCache::with_capacity(config.cache_capacity)?;

    for page in [1, 2, 1, last_page, last_page + 1, 2] {
        if let Some(body) = pages.get(Some(&page)) {
            println!("page {} (cached):\n{}", page, body);
            continue;
        }

        let hyper = paginator.get_hyper(page, config.page_size)?;
        let body = serde_json::to_string_pretty(&hyper)
            .with_context(|| format!("failed to render page {}", page))?;
        println!("page {}:\n{}", page, body);
        pages.put(Some(page), Some(body));
    }

    let stats = pages.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        "page cache hit rate {:.2}",
        stats.hit_rate()
    );
    Ok(())
}

/// Prints the cache contents sorted by key.
fn print_cache<K, V, P>(cache: &Cache<K, V, P>)
where
    K: Hash + Eq + Ord + fmt::Display,
    V: fmt::Display,
    P: EvictionPolicy<K>,
{
    let mut entries: Vec<_> = cache.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    println!("Current cache:");
    for (key, value) in entries {
        println!("{}: {}", key, value);
    }
}
