pub mod cache;
pub mod resolver;
pub mod transport;

pub use cache::{AddressTtlCache, CacheMetrics, CacheStats, Clock, ManualClock, SystemClock};
pub use resolver::{IpamResolver, IpamResolverBuilder};
pub use transport::HttpIpamTransport;
