use netbox_dns_domain::AddressFamily;
use std::sync::Arc;
use std::time::Duration;

/// Time-bounded store of resolved addresses, keyed by host name and family.
///
/// Implementations serialize internally; callers never lock.
pub trait AddressCache: Send + Sync {
    /// Live address for `host_name`, or `None` when absent or expired.
    fn get(&self, host_name: &str, family: AddressFamily) -> Option<Arc<str>>;

    /// Insert or replace the entry; it expires `ttl` after this call.
    fn set(&self, host_name: &str, family: AddressFamily, address: Arc<str>, ttl: Duration);
}
