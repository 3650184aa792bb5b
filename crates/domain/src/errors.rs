use thiserror::Error;

/// Per-request failure kinds of the resolution pipeline.
///
/// None of these are fatal to the process; the resolver boundary folds
/// every variant into an empty answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IPAM returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("IPAM fetch failed after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("Could not decode IPAM response: {0}")]
    Decode(String),

    #[error("Resolution cancelled")]
    Cancelled,

    #[error("Unsupported address family: {0}")]
    UnsupportedFamily(i64),

    #[error("Unknown address family: {0}")]
    UnknownFamily(String),

    #[error("Invalid host name: {0}")]
    InvalidHostName(String),

    #[error("Invalid IPAM URL: {0}")]
    InvalidUrl(String),
}

impl DomainError {
    /// Whether another attempt against the IPAM service could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::UpstreamStatus(_))
    }
}
