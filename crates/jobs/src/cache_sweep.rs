use netbox_dns_infrastructure::ipam::AddressTtlCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically drops expired entries from the address cache.
///
/// Expired entries are never served regardless; this only bounds memory for
/// names that are not queried again.
pub struct CacheSweepJob {
    cache: Arc<AddressTtlCache>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(cache: Arc<AddressTtlCache>) -> Self {
        Self {
            cache,
            interval_secs: 60,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // First tick fires immediately; nothing can be expired yet.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.purge_expired();
                        debug!(removed, remaining = self.cache.len(), "Cache sweep completed");
                    }
                }
            }
        })
    }
}
