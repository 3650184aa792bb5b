use bytes::Bytes;
use netbox_dns_domain::{DomainError, ResolutionRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::ports::IpamTransport;

/// Bounded linear retry budget for IPAM lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    /// At least one attempt is always made.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_DELAY)
    }
}

/// Issues IPAM lookups through a transport and retries transport errors and
/// non-200 statuses until the policy is spent.
pub struct RetryingFetcher {
    transport: Arc<dyn IpamTransport>,
    policy: RetryPolicy,
}

impl RetryingFetcher {
    pub fn new(transport: Arc<dyn IpamTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Fetch the lookup body for `request`.
    ///
    /// Cancelling `cancel` aborts the in-flight attempt or the pending delay
    /// and returns `DomainError::Cancelled`.
    pub async fn fetch(
        &self,
        request: &ResolutionRequest,
        cancel: &CancellationToken,
    ) -> Result<Bytes, DomainError> {
        let url = request.lookup_url();
        let max_attempts = self.policy.max_attempts;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            debug!(url = %url, attempt, max_attempts, "Querying IPAM");

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                result = self.transport.fetch(request) => result,
            };

            match result {
                Ok(body) => {
                    debug!(url = %url, attempt, body_len = body.len(), "IPAM response received");
                    return Ok(body);
                }
                Err(e) if e.is_retryable() => {
                    warn!(url = %url, attempt, error = %e, "IPAM attempt failed");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }

            if attempt < max_attempts {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                    _ = tokio::time::sleep(self.policy.delay) => {}
                }
            }
        }

        let last_error = last_error.map(|e| e.to_string()).unwrap_or_default();
        error!(
            url = %url,
            attempts = max_attempts,
            last_error = %last_error,
            "IPAM lookup failed, giving up"
        );

        Err(DomainError::RetriesExhausted {
            attempts: max_attempts,
            last_error,
        })
    }
}
