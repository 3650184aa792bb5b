pub const TOKEN: &str = "0123456789abcdef";

/// Host names used across flows.
pub struct TestHosts;

impl TestHosts {
    pub fn db() -> &'static str {
        "db.example.com"
    }

    pub fn web() -> &'static str {
        "web.example.com"
    }

    pub fn dual_stack() -> &'static str {
        "dual.example.com"
    }

    pub fn broken() -> &'static str {
        "broken.example.com"
    }

    pub fn unknown() -> &'static str {
        "unknown.example.com"
    }
}

/// NetBox-shaped JSON body from `(family, cidr)` pairs, in order.
pub fn records_json(records: &[(u8, &str)]) -> String {
    let results: Vec<String> = records
        .iter()
        .map(|(family, address)| {
            format!(
                r#"{{"family":{{"value":{family},"label":"IPv{family}"}},"address":"{address}"}}"#
            )
        })
        .collect();
    format!(r#"{{"results":[{}]}}"#, results.join(","))
}
