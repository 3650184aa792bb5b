//! Ready-to-call resolver for the DNS framework.
//!
//! ```no_run
//! use netbox_dns_domain::{AddressFamily, Config};
//! use netbox_dns_infrastructure::ipam::IpamResolverBuilder;
//!
//! # async fn run(config: Config) -> Result<(), netbox_dns_domain::DomainError> {
//! let resolver = IpamResolverBuilder::new(config.ipam).build()?;
//! let address = resolver.resolve("db.example.com", AddressFamily::V4).await;
//! # Ok(())
//! # }
//! ```

pub mod builder;

pub use builder::IpamResolverBuilder;

use super::cache::AddressTtlCache;
use netbox_dns_application::use_cases::{AddressResolution, ResolveAddressUseCase};
use netbox_dns_domain::{AddressFamily, DomainError, ResolutionRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Resolve-address use case bound to one IPAM endpoint, credential and TTL.
pub struct IpamResolver {
    base_url: Arc<str>,
    token: Arc<str>,
    ttl: Duration,
    cache: Arc<AddressTtlCache>,
    use_case: Arc<ResolveAddressUseCase>,
}

impl IpamResolver {
    pub fn request(&self, host_name: &str, family: AddressFamily) -> ResolutionRequest {
        ResolutionRequest {
            base_url: Arc::clone(&self.base_url),
            token: Arc::clone(&self.token),
            host_name: Arc::from(host_name),
            ttl: self.ttl,
            family,
        }
    }

    /// Address of `family` for `host_name`, or an empty string.
    pub async fn resolve(&self, host_name: &str, family: AddressFamily) -> String {
        self.use_case.resolve(&self.request(host_name, family)).await
    }

    pub async fn resolve_with_cancel(
        &self,
        host_name: &str,
        family: AddressFamily,
        cancel: &CancellationToken,
    ) -> String {
        self.use_case
            .resolve_with_cancel(&self.request(host_name, family), cancel)
            .await
    }

    pub async fn execute(
        &self,
        host_name: &str,
        family: AddressFamily,
        cancel: &CancellationToken,
    ) -> Result<AddressResolution, DomainError> {
        self.use_case
            .execute(&self.request(host_name, family), cancel)
            .await
    }

    pub fn cache(&self) -> &Arc<AddressTtlCache> {
        &self.cache
    }
}
