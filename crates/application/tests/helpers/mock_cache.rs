use netbox_dns_application::ports::AddressCache;
use netbox_dns_domain::AddressFamily;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock AddressCache (never expires, records every write)
// ============================================================================

#[derive(Default)]
pub struct MockAddressCache {
    entries: Mutex<HashMap<(String, AddressFamily), (Arc<str>, Duration)>>,
    gets: AtomicU32,
    sets: AtomicU32,
}

impl MockAddressCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warm(&self, host_name: &str, family: AddressFamily, address: &str) {
        self.entries.lock().unwrap().insert(
            (host_name.to_string(), family),
            (Arc::from(address), Duration::from_secs(300)),
        );
    }

    pub fn ttl_of(&self, host_name: &str, family: AddressFamily) -> Option<Duration> {
        self.entries
            .lock()
            .unwrap()
            .get(&(host_name.to_string(), family))
            .map(|(_, ttl)| *ttl)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn get_count(&self) -> u32 {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn set_count(&self) -> u32 {
        self.sets.load(Ordering::SeqCst)
    }
}

impl AddressCache for MockAddressCache {
    fn get(&self, host_name: &str, family: AddressFamily) -> Option<Arc<str>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .get(&(host_name.to_string(), family))
            .map(|(address, _)| Arc::clone(address))
    }

    fn set(&self, host_name: &str, family: AddressFamily, address: Arc<str>, ttl: Duration) {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert((host_name.to_string(), family), (address, ttl));
    }
}
