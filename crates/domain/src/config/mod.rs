//! Configuration module for NetBox DNS
//!
//! - `root`: Main configuration and CLI overrides
//! - `ipam`: IPAM endpoint, credential and retry budget
//! - `cache`: Local address cache maintenance
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod ipam;
pub mod logging;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use ipam::IpamConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
