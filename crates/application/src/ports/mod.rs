pub mod address_cache;
pub mod ipam_transport;

pub use address_cache::AddressCache;
pub use ipam_transport::IpamTransport;
