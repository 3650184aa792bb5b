use serde::{Deserialize, Serialize};

/// Local address cache maintenance
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Seconds between sweeps that drop expired entries (default: 60).
    /// Expired entries are never served either way; 0 disables the sweep.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval: default_sweep_interval(),
        }
    }
}

fn default_sweep_interval() -> u64 {
    60
}
