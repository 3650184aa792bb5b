pub mod http;

pub use http::HttpIpamTransport;
