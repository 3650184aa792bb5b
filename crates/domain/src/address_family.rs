use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// IP address family as reported by the IPAM `family.value` field.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4 = 4,
    V6 = 6,
}

impl AddressFamily {
    #[inline]
    pub fn version(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for AddressFamily {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::V4),
            6 => Ok(Self::V6),
            other => Err(DomainError::UnsupportedFamily(other)),
        }
    }
}

impl FromStr for AddressFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4" | "ipv4" | "a" => Ok(Self::V4),
            "6" | "ipv6" | "aaaa" => Ok(Self::V6),
            other => match other.parse::<i64>() {
                Ok(version) => Err(DomainError::UnsupportedFamily(version)),
                Err(_) => Err(DomainError::UnknownFamily(s.trim().to_string())),
            },
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ipv{}", self.version())
    }
}
