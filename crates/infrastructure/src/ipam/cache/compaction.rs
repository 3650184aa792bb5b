use super::storage::AddressTtlCache;
use std::sync::atomic::Ordering as AtomicOrdering;
use tracing::debug;

impl AddressTtlCache {
    /// Physically remove every expired entry; returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = self.now();
        let mut removed = 0;

        for shard in [&self.v4, &self.v6] {
            shard.retain(|_host, entry| {
                let live = entry.is_live(now);
                if !live {
                    removed += 1;
                }
                live
            });
        }

        self.metrics
            .compactions
            .fetch_add(1, AtomicOrdering::Relaxed);

        if removed > 0 {
            debug!(removed, cache_size = self.len(), "Cache compaction completed");
        }

        removed
    }
}
