use async_trait::async_trait;
use bytes::Bytes;
use netbox_dns_domain::{DomainError, ResolutionRequest};

/// A single authenticated lookup against the IPAM service.
///
/// Returns the body of a 200 response. Connection failures map to
/// `DomainError::Transport` and any other status to
/// `DomainError::UpstreamStatus`; retrying is the caller's concern.
#[async_trait]
pub trait IpamTransport: Send + Sync {
    async fn fetch(&self, request: &ResolutionRequest) -> Result<Bytes, DomainError>;
}
