use serde::{Deserialize, Serialize};
use std::time::Duration;

/// IPAM service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IpamConfig {
    /// IP address endpoint, e.g. "https://netbox.example.com/api/ipam/ip-addresses"
    #[serde(default)]
    pub url: String,

    /// API token sent as `Authorization: Token <token>`
    #[serde(default)]
    pub token: String,

    /// Seconds a resolved address stays in the local cache (default: 300)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,

    /// Attempts per lookup before giving up (default: 10)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Pause between attempts in milliseconds (default: 1000)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Timeout of a single HTTP attempt in milliseconds (default: 5000)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl IpamConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for IpamConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            cache_ttl: default_cache_ttl(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_cache_ttl() -> u64 {
    300
}

fn default_max_attempts() -> u32 {
    10
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_request_timeout_ms() -> u64 {
    5000
}
