#![allow(dead_code)]

pub mod mock_cache;

pub use mock_cache::MockAddressCache;
pub use mock_transport::MockIpamTransport;

use bytes::Bytes;
use netbox_dns_domain::{AddressFamily, ResolutionRequest};
use std::time::Duration;

pub const IPAM_URL: &str = "http://netbox.test/api/ipam/ip-addresses";
pub const TOKEN: &str = "0123456789abcdef";

pub fn request(host_name: &str, family: AddressFamily) -> ResolutionRequest {
    ResolutionRequest::new(IPAM_URL, TOKEN, host_name, Duration::from_secs(5), family)
}

/// NetBox-shaped body from `(family, cidr)` pairs, in order.
pub fn records_body(records: &[(u8, &str)]) -> Bytes {
    let results: Vec<String> = records
        .iter()
        .map(|(family, address)| {
            format!(
                r#"{{"family":{{"value":{family},"label":"IPv{family}"}},"address":"{address}"}}"#
            )
        })
        .collect();
    Bytes::from(format!(r#"{{"results":[{}]}}"#, results.join(",")))
}
