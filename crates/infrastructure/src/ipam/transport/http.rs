use async_trait::async_trait;
use bytes::Bytes;
use netbox_dns_application::ports::IpamTransport;
use netbox_dns_domain::{DomainError, ResolutionRequest};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

/// IPAM lookups over HTTP(S) with a pooled reqwest client.
pub struct HttpIpamTransport {
    client: reqwest::Client,
}

impl HttpIpamTransport {
    /// `request_timeout` bounds one attempt end to end, body included.
    pub fn new(request_timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(request_timeout)
            .pool_max_idle_per_host(4)
            .user_agent(concat!("netbox-dns/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IpamTransport for HttpIpamTransport {
    async fn fetch(&self, request: &ResolutionRequest) -> Result<Bytes, DomainError> {
        let url = Url::parse(&request.lookup_url())
            .map_err(|e| DomainError::InvalidUrl(format!("{}: {}", request.base_url, e)))?;

        let response = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, request.authorization())
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(
                url = %url,
                status = status.as_u16(),
                reason = status.canonical_reason().unwrap_or("Unknown"),
                "IPAM returned non-OK status"
            );
            return Err(DomainError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            DomainError::Transport(format!("Failed to read IPAM response from {url}: {e}"))
        })?;

        debug!(url = %url, body_len = body.len(), "IPAM response body read");

        Ok(body)
    }
}
