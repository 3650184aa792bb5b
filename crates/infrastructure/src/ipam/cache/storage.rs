use super::{CacheEntry, CacheMetrics, CacheStats, Clock, SystemClock};
use dashmap::DashMap;
use netbox_dns_application::ports::AddressCache;
use netbox_dns_domain::AddressFamily;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

type Shard = DashMap<Arc<str>, CacheEntry, FxBuildHasher>;

/// Upper bound for entry lifetimes, keeps `now + ttl` from overflowing.
const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 3600);

/// Host name → address cache with per-entry expiry.
///
/// One map per address family so lookups borrow the host name as `&str`
/// without building a composite key. Expiry is checked on read; expired
/// entries are dropped lazily or by [`purge_expired`](Self::purge_expired).
pub struct AddressTtlCache {
    // Keyed by (host, family) rather than host alone: a host-only key would
    // let a cached IPv4 address answer a later IPv6 query for the same name.
    pub(super) v4: Shard,
    pub(super) v6: Shard,
    clock: Arc<dyn Clock>,
    pub(super) metrics: Arc<CacheMetrics>,
}

impl AddressTtlCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        info!("Initializing IPAM address cache");

        Self {
            v4: DashMap::with_hasher(FxBuildHasher),
            v6: DashMap::with_hasher(FxBuildHasher),
            clock,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    #[inline]
    fn shard(&self, family: AddressFamily) -> &Shard {
        match family {
            AddressFamily::V4 => &self.v4,
            AddressFamily::V6 => &self.v6,
        }
    }

    #[inline]
    pub(super) fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn get(&self, host_name: &str, family: AddressFamily) -> Option<Arc<str>> {
        let shard = self.shard(family);
        let now = self.now();

        let expired = match shard.get(host_name) {
            Some(entry) if entry.is_live(now) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(Arc::clone(&entry.address));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            // A concurrent `set` may have refreshed the entry meanwhile.
            if shard.remove_if(host_name, |_, entry| !entry.is_live(now)).is_some() {
                self.metrics
                    .lazy_deletions
                    .fetch_add(1, AtomicOrdering::Relaxed);
                debug!(host = host_name, family = %family, "Dropped expired cache entry");
            }
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    pub fn set(&self, host_name: &str, family: AddressFamily, address: Arc<str>, ttl: Duration) {
        let expires_at = self.now() + ttl.min(MAX_TTL);
        self.shard(family)
            .insert(Arc::from(host_name), CacheEntry::new(address, expires_at));
        self.metrics
            .insertions
            .fetch_add(1, AtomicOrdering::Relaxed);
    }

    /// Stored entries, including expired ones not yet dropped.
    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.len())
    }
}

impl Default for AddressTtlCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressCache for AddressTtlCache {
    fn get(&self, host_name: &str, family: AddressFamily) -> Option<Arc<str>> {
        AddressTtlCache::get(self, host_name, family)
    }

    fn set(&self, host_name: &str, family: AddressFamily, address: Arc<str>, ttl: Duration) {
        AddressTtlCache::set(self, host_name, family, address, ttl)
    }
}
