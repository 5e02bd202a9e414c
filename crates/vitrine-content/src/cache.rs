//! Override Cache
//!
//! Time-boxed cache of partial token trees keyed by (model, theme, redacted
//! credential). Bounded to a fixed entry count with oldest-inserted-first
//! eviction; expired entries are evicted on lookup.

use crate::clock::{Clock, SystemClock};
use indexmap::IndexMap;
use std::time::{Duration, Instant};
use vitrine_tokens::TokenTree;

/// Entry time-to-live (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Maximum number of cached override trees
pub const DEFAULT_MAX_ENTRIES: usize = 10;

/// Cached override entry
#[derive(Debug, Clone)]
struct CacheEntry {
    tree: TokenTree,
    inserted_at: Instant,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entry_count: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Derive the cache key from source model, theme and a redacted credential
/// suffix (never the full key).
pub fn cache_key(model: &str, theme: &str, api_key: Option<&str>) -> String {
    let suffix = api_key
        .filter(|key| !key.is_empty())
        .map(redacted_suffix)
        .unwrap_or("nokey");
    format!("{model}-{theme}-{suffix}")
}

/// Last 8 characters of the credential
fn redacted_suffix(key: &str) -> &str {
    key.char_indices()
        .rev()
        .nth(7)
        .map(|(i, _)| &key[i..])
        .unwrap_or(key)
}

/// TTL + size bounded override cache
pub struct OverrideCache<C: Clock = SystemClock> {
    entries: IndexMap<String, CacheEntry>,
    ttl: Duration,
    max_entries: usize,
    hits: u64,
    misses: u64,
    clock: C,
}

impl OverrideCache<SystemClock> {
    /// Create a cache with the default TTL, bound and wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for OverrideCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> OverrideCache<C> {
    /// Create a cache with an injected clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: IndexMap::new(),
            ttl: DEFAULT_TTL,
            max_entries: DEFAULT_MAX_ENTRIES,
            hits: 0,
            misses: 0,
            clock,
        }
    }

    /// Override the entry TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the entry bound
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Look up an unexpired entry. Expired entries count as misses and are
    /// evicted on the spot.
    pub fn get(&mut self, key: &str) -> Option<&TokenTree> {
        let now = self.clock.now();

        let fresh = match self.entries.get(key) {
            Some(entry) => now.duration_since(entry.inserted_at) < self.ttl,
            None => {
                self.misses += 1;
                return None;
            }
        };

        if !fresh {
            self.entries.shift_remove(key);
            self.misses += 1;
            return None;
        }

        self.hits += 1;
        self.entries.get(key).map(|entry| &entry.tree)
    }

    /// Store an override tree. When the cache is full the oldest-inserted
    /// entry is evicted first; re-inserting an existing key refreshes its
    /// timestamp and position without evicting.
    pub fn insert(&mut self, key: String, tree: TokenTree) {
        if self.entries.shift_remove(&key).is_none() && self.entries.len() >= self.max_entries {
            self.entries.shift_remove_index(0);
        }

        self.entries.insert(
            key,
            CacheEntry {
                tree,
                inserted_at: self.clock.now(),
            },
        );
    }

    /// Drop all entries and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit/miss counters and entry count
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use vitrine_tokens::tree_from_json;

    #[derive(Clone)]
    struct TestClock(Rc<Cell<Instant>>);

    impl TestClock {
        fn start() -> Self {
            Self(Rc::new(Cell::new(Instant::now())))
        }

        fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for TestClock {
        fn now(&self) -> Instant {
            self.0.get()
        }
    }

    fn sample_tree(value: &str) -> TokenTree {
        tree_from_json(&serde_json::json!({ "colors": { "primary": { "500": value } } }))
    }

    #[test]
    fn test_cache_key_redacts_credential() {
        assert_eq!(
            cache_key("design-tokens", "default", Some("abcdef1234567890")),
            "design-tokens-default-34567890"
        );
        assert_eq!(cache_key("design-tokens", "dark", None), "design-tokens-dark-nokey");
        assert_eq!(cache_key("design-tokens", "dark", Some("")), "design-tokens-dark-nokey");
        // Credentials shorter than the suffix length pass through whole
        assert_eq!(cache_key("m", "t", Some("abc")), "m-t-abc");
    }

    #[test]
    fn test_hit_within_ttl() {
        let clock = TestClock::start();
        let mut cache = OverrideCache::with_clock(clock.clone());

        cache.insert("k".into(), sample_tree("#ff0000"));

        clock.advance(DEFAULT_TTL - Duration::from_secs(1));
        assert!(cache.get("k").is_some());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_miss_and_eviction_at_ttl() {
        let clock = TestClock::start();
        let mut cache = OverrideCache::with_clock(clock.clone());

        cache.insert("k".into(), sample_tree("#ff0000"));

        // Exactly at the TTL boundary the entry is already expired
        clock.advance(DEFAULT_TTL);
        assert!(cache.get("k").is_none());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_bound_evicts_oldest_inserted() {
        let clock = TestClock::start();
        let mut cache = OverrideCache::with_clock(clock.clone()).with_max_entries(3);

        cache.insert("a".into(), sample_tree("1"));
        cache.insert("b".into(), sample_tree("2"));
        cache.insert("c".into(), sample_tree("3"));
        cache.insert("d".into(), sample_tree("4"));

        assert_eq!(cache.len(), 3);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("d").is_some());
    }

    #[test]
    fn test_reinsert_does_not_evict() {
        let clock = TestClock::start();
        let mut cache = OverrideCache::with_clock(clock.clone()).with_max_entries(2);

        cache.insert("a".into(), sample_tree("1"));
        cache.insert("b".into(), sample_tree("2"));
        cache.insert("b".into(), sample_tree("2b"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_some());
    }

    #[test]
    fn test_clear() {
        let mut cache = OverrideCache::new();
        cache.insert("a".into(), sample_tree("1"));
        cache.get("a");
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats { entry_count: 0, hits: 0, misses: 0 });
    }
}
