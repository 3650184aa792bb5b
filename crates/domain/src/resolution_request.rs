use crate::{AddressFamily, DomainError};
use std::sync::Arc;
use std::time::Duration;

/// Parameters of one resolution call.
///
/// Uses `Arc<str>` so the same request can be shared by the cache, the
/// fetcher and the log lines without copying.
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    pub base_url: Arc<str>,
    pub token: Arc<str>,
    pub host_name: Arc<str>,
    pub ttl: Duration,
    pub family: AddressFamily,
}

impl ResolutionRequest {
    pub fn new(
        base_url: impl Into<Arc<str>>,
        token: impl Into<Arc<str>>,
        host_name: impl Into<Arc<str>>,
        ttl: Duration,
        family: AddressFamily,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            host_name: host_name.into(),
            ttl,
            family,
        }
    }

    /// Build a request from the raw inbound contract, where the family is a
    /// plain integer.
    pub fn from_parts(
        base_url: &str,
        token: &str,
        host_name: &str,
        ttl: Duration,
        family: i64,
    ) -> Result<Self, DomainError> {
        let request = Self::new(
            base_url,
            token,
            host_name,
            ttl,
            AddressFamily::try_from(family)?,
        );
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.host_name.trim().is_empty() {
            return Err(DomainError::InvalidHostName(
                "host name cannot be empty".to_string(),
            ));
        }
        if self.host_name.len() > 253 {
            return Err(DomainError::InvalidHostName(format!(
                "{}... exceeds 253 characters",
                self.host_name.chars().take(32).collect::<String>()
            )));
        }
        if let Some(c) = self
            .host_name
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '&'))
        {
            return Err(DomainError::InvalidHostName(format!(
                "{} contains {:?}",
                self.host_name, c
            )));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(DomainError::InvalidUrl(format!(
                "{} must start with http:// or https://",
                self.base_url
            )));
        }
        Ok(())
    }

    /// `{base_url}/?dns_name={host_name}`
    pub fn lookup_url(&self) -> String {
        format!("{}/?dns_name={}", self.base_url, self.host_name)
    }

    /// `Authorization` header value expected by the IPAM service.
    pub fn authorization(&self) -> String {
        format!("Token {}", self.token)
    }
}
