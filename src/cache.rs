/// Caller-owned TTL cache for refresh results.
///
/// Dashboard pages poll faster than the store produces new data, so derived
/// results (snapshots, reports, chart series) are worth keeping for a few
/// minutes. The cache is an explicit object the caller owns and passes
/// around: explicit string keys, configurable TTL, and a caller-supplied
/// clock on every call — no globals, no ambient time source. Fixed capacity;
/// inserting past capacity evicts the stalest entry.
use heapless::{String, Vec};

/// Default entry lifetime: 3 minutes.
pub const DEFAULT_TTL_MS: i64 = 3 * 60 * 1000;

/// Maximum cache key length. Keys are short page identifiers like
/// `"air_report"` or `"stats_influx"`; longer keys are not cached.
pub const MAX_KEY_LEN: usize = 32;

/// Cache key string.
pub type CacheKey = String<MAX_KEY_LEN>;

#[derive(Debug)]
struct Entry<V> {
    key: CacheKey,
    stored_at: i64,
    value: V,
}

/// Fixed-capacity TTL cache keyed by short strings.
#[derive(Debug)]
pub struct TtlCache<V, const N: usize> {
    entries: Vec<Entry<V>, N>,
    ttl_ms: i64,
}

impl<V, const N: usize> TtlCache<V, N> {
    /// Create a cache whose entries stay fresh for `ttl_ms` milliseconds.
    pub const fn new(ttl_ms: i64) -> Self {
        Self {
            entries: Vec::new(),
            ttl_ms,
        }
    }

    /// Create a cache with [`DEFAULT_TTL_MS`].
    pub const fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }

    /// Look up a fresh entry. An entry whose age has reached the TTL is a
    /// miss; it stays in storage until replaced, evicted, or purged.
    pub fn get(&self, key: &str, now: i64) -> Option<&V> {
        self.entries
            .iter()
            .find(|e| e.key.as_str() == key && now - e.stored_at < self.ttl_ms)
            .map(|e| &e.value)
    }

    /// Store a value under `key`, stamped at `now`. Replaces an existing
    /// entry with the same key; otherwise evicts the stalest entry if the
    /// cache is full. Keys longer than [`MAX_KEY_LEN`] are not cached.
    pub fn insert(&mut self, key: &str, value: V, now: i64) {
        let Ok(key) = CacheKey::try_from(key) else {
            log::debug!("cache key over {MAX_KEY_LEN} bytes, not caching");
            return;
        };

        if let Some(e) = self.entries.iter_mut().find(|e| e.key == key) {
            e.stored_at = now;
            e.value = value;
            return;
        }

        if self.entries.is_full() {
            let stalest = self
                .entries
                .iter()
                .enumerate()
                .min_by_key(|(_, e)| e.stored_at)
                .map(|(i, _)| i);
            if let Some(i) = stalest {
                log::debug!("cache full, evicting stalest entry '{}'", self.entries[i].key);
                self.entries.swap_remove(i);
            }
        }

        let _ = self.entries.push(Entry {
            key,
            stored_at: now,
            value,
        });
    }

    /// Drop every entry whose age has reached the TTL.
    pub fn purge_expired(&mut self, now: i64) {
        let ttl = self.ttl_ms;
        self.entries.retain(|e| now - e.stored_at < ttl);
    }

    /// Number of stored entries, fresh or expired.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
