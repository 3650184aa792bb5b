//! NetBox DNS Infrastructure Layer
//!
//! Concrete adapters behind the application ports: the in-memory TTL
//! address cache, the reqwest-based IPAM transport and the builder that
//! wires them into a ready resolver.
pub mod ipam;
