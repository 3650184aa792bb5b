use std::sync::Arc;
use std::time::Instant;

/// Cached address; replaced wholesale on refresh, never mutated.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub address: Arc<str>,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(address: Arc<str>, expires_at: Instant) -> Self {
        Self {
            address,
            expires_at,
        }
    }

    /// Visible only while `now < expires_at`.
    #[inline]
    pub fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}
