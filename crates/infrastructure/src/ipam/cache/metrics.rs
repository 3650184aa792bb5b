use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free cache counters.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub lazy_deletions: AtomicU64,
    pub compactions: AtomicU64,
}

/// Point-in-time view of [`CacheMetrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub lazy_deletions: u64,
    pub compactions: u64,
    pub hit_rate: f64,
}

impl CacheMetrics {
    pub fn snapshot(&self, entries: usize) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        CacheStats {
            entries,
            hits,
            misses,
            insertions: self.insertions.load(Ordering::Relaxed),
            lazy_deletions: self.lazy_deletions.load(Ordering::Relaxed),
            compactions: self.compactions.load(Ordering::Relaxed),
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}
