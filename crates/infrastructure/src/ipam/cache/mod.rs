pub mod clock;
pub mod compaction;
pub mod entry;
pub mod metrics;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use metrics::{CacheMetrics, CacheStats};
pub use storage::AddressTtlCache;
