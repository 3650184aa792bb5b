use crate::{AddressFamily, DomainError};
use serde::Deserialize;

/// `family` object of an IPAM address record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Family {
    #[serde(rename = "value")]
    pub version: i64,

    /// Display label only ("IPv4", "IPv6"); never used for matching.
    #[serde(default)]
    pub label: String,
}

/// One element of the IPAM `results` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressRecord {
    pub family: Family,

    /// Address in CIDR notation, e.g. "10.0.0.5/24"
    pub address: String,

    #[serde(rename = "dns_name", default)]
    pub host_name: Option<String>,
}

impl AddressRecord {
    #[inline]
    pub fn matches(&self, family: AddressFamily) -> bool {
        self.family.version == i64::from(family.version())
    }

    /// Address with any trailing `/prefixLen` removed.
    pub fn bare_address(&self) -> &str {
        self.address
            .split_once('/')
            .map_or(self.address.as_str(), |(addr, _)| addr)
    }
}

/// Response envelope of `GET {ipam}/?dns_name={name}`.
///
/// Paging fields (`count`, `next`, `previous`) are ignored; only the first
/// page is ever consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordsList {
    #[serde(rename = "results", default)]
    pub records: Vec<AddressRecord>,
}

impl RecordsList {
    /// Decode a raw response body.
    ///
    /// A malformed body is a `DomainError::Decode`; a well-formed body with
    /// no results decodes to an empty list.
    pub fn decode(body: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(body).map_err(|e| DomainError::Decode(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// First record of `family` in response order, as a bare address.
    pub fn select(&self, family: AddressFamily) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.matches(family))
            .map(AddressRecord::bare_address)
    }
}
