use super::IpamResolver;
use crate::ipam::cache::AddressTtlCache;
use crate::ipam::transport::HttpIpamTransport;
use netbox_dns_application::ports::IpamTransport;
use netbox_dns_application::services::{RetryPolicy, RetryingFetcher};
use netbox_dns_application::use_cases::ResolveAddressUseCase;
use netbox_dns_domain::config::IpamConfig;
use netbox_dns_domain::DomainError;
use std::sync::Arc;
use tracing::info;

pub struct IpamResolverBuilder {
    config: IpamConfig,
    cache: Option<Arc<AddressTtlCache>>,
    transport: Option<Arc<dyn IpamTransport>>,
    retry_policy: Option<RetryPolicy>,
}

impl IpamResolverBuilder {
    pub fn new(config: IpamConfig) -> Self {
        Self {
            config,
            cache: None,
            transport: None,
            retry_policy: None,
        }
    }

    /// Share an existing cache, e.g. with the sweep job.
    pub fn with_cache(mut self, cache: Arc<AddressTtlCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn IpamTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Overrides `max_attempts` / `retry_delay_ms` from the config.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<IpamResolver, DomainError> {
        let policy = self.retry_policy.unwrap_or_else(|| {
            RetryPolicy::new(self.config.max_attempts, self.config.retry_delay())
        });

        let transport: Arc<dyn IpamTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpIpamTransport::new(self.config.request_timeout())?),
        };

        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(AddressTtlCache::new()));

        info!(
            url = %self.config.url,
            cache_ttl_secs = self.config.cache_ttl,
            max_attempts = policy.max_attempts,
            retry_delay_ms = policy.delay.as_millis() as u64,
            "Building IPAM resolver"
        );

        let use_case = ResolveAddressUseCase::new(
            cache.clone(),
            RetryingFetcher::new(transport, policy),
        );

        Ok(IpamResolver {
            base_url: Arc::from(self.config.url.as_str()),
            token: Arc::from(self.config.token.as_str()),
            ttl: self.config.cache_ttl(),
            cache,
            use_case: Arc::new(use_case),
        })
    }
}
