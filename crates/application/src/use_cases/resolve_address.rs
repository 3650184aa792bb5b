use netbox_dns_domain::{AddressFamily, DomainError, RecordsList, ResolutionRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::ports::AddressCache;
use crate::services::RetryingFetcher;

/// How a resolution call ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Served from the local cache; the IPAM service was not contacted.
    Cached(Arc<str>),
    /// Fetched from the IPAM service and written to the cache.
    Fetched(Arc<str>),
    /// The IPAM service knows no record for the name.
    NoRecords,
    /// Records exist, none of the requested family.
    NoFamilyMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressResolution {
    pub host_name: Arc<str>,
    pub family: AddressFamily,
    pub outcome: ResolutionOutcome,
}

impl AddressResolution {
    fn new(request: &ResolutionRequest, outcome: ResolutionOutcome) -> Self {
        Self {
            host_name: Arc::clone(&request.host_name),
            family: request.family,
            outcome,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match &self.outcome {
            ResolutionOutcome::Cached(address) | ResolutionOutcome::Fetched(address) => {
                Some(address)
            }
            ResolutionOutcome::NoRecords | ResolutionOutcome::NoFamilyMatch => None,
        }
    }

    pub fn cache_hit(&self) -> bool {
        matches!(self.outcome, ResolutionOutcome::Cached(_))
    }
}

/// Resolves a host name to one address of the requested family: cache
/// first, then the IPAM service, writing matches back into the cache.
///
/// Concurrent misses for the same name fetch independently.
pub struct ResolveAddressUseCase {
    cache: Arc<dyn AddressCache>,
    fetcher: RetryingFetcher,
}

impl ResolveAddressUseCase {
    pub fn new(cache: Arc<dyn AddressCache>, fetcher: RetryingFetcher) -> Self {
        Self { cache, fetcher }
    }

    pub async fn execute(
        &self,
        request: &ResolutionRequest,
        cancel: &CancellationToken,
    ) -> Result<AddressResolution, DomainError> {
        request.validate()?;

        if let Some(address) = self.cache.get(&request.host_name, request.family) {
            debug!(
                host = %request.host_name,
                family = %request.family,
                "Found in local cache"
            );
            return Ok(AddressResolution::new(
                request,
                ResolutionOutcome::Cached(address),
            ));
        }

        debug!(
            host = %request.host_name,
            family = %request.family,
            "Cache MISS"
        );

        let body = self.fetcher.fetch(request, cancel).await?;
        let records = RecordsList::decode(&body)?;

        if records.is_empty() {
            info!(host = %request.host_name, "Record not found in IPAM");
            return Ok(AddressResolution::new(request, ResolutionOutcome::NoRecords));
        }

        let Some(address) = records.select(request.family) else {
            debug!(
                host = %request.host_name,
                family = %request.family,
                records = records.len(),
                "No record of the requested family"
            );
            return Ok(AddressResolution::new(
                request,
                ResolutionOutcome::NoFamilyMatch,
            ));
        };

        let address: Arc<str> = Arc::from(address);
        self.cache.set(
            &request.host_name,
            request.family,
            Arc::clone(&address),
            request.ttl,
        );

        debug!(
            host = %request.host_name,
            family = %request.family,
            address = %address,
            ttl_secs = request.ttl.as_secs(),
            "Resolved and cached"
        );

        Ok(AddressResolution::new(
            request,
            ResolutionOutcome::Fetched(address),
        ))
    }

    /// Inbound contract of the DNS framework: the address, or an empty
    /// string on any failure or when nothing matches.
    pub async fn resolve(&self, request: &ResolutionRequest) -> String {
        self.resolve_with_cancel(request, &CancellationToken::new())
            .await
    }

    /// Same as [`resolve`](Self::resolve) for callers holding the raw
    /// parameters, with the family as a plain integer.
    pub async fn lookup(
        &self,
        base_url: &str,
        token: &str,
        host_name: &str,
        ttl: Duration,
        family: i64,
    ) -> String {
        match ResolutionRequest::from_parts(base_url, token, host_name, ttl, family) {
            Ok(request) => self.resolve(&request).await,
            Err(e) => {
                warn!(host = %host_name, family, error = %e, "Rejected resolution request");
                String::new()
            }
        }
    }

    pub async fn resolve_with_cancel(
        &self,
        request: &ResolutionRequest,
        cancel: &CancellationToken,
    ) -> String {
        match self.execute(request, cancel).await {
            Ok(resolution) => resolution.address().map(str::to_string).unwrap_or_default(),
            Err(e) => {
                warn!(
                    host = %request.host_name,
                    family = %request.family,
                    error = %e,
                    "Resolution failed"
                );
                String::new()
            }
        }
    }
}
