//! NetBox DNS Application Layer
//!
//! Ports the resolution pipeline depends on, the retrying IPAM fetcher and
//! the resolve-address use case that orchestrates them.
pub mod ports;
pub mod services;
pub mod use_cases;
