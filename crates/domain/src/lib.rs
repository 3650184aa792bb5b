//! NetBox DNS Domain Layer
pub mod address_family;
pub mod address_record;
pub mod config;
pub mod errors;
pub mod resolution_request;

pub use address_family::AddressFamily;
pub use address_record::{AddressRecord, Family, RecordsList};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use resolution_request::ResolutionRequest;
