#![allow(dead_code)]


pub use ipam_mock::{records_json, IpamMock, TOKEN};
