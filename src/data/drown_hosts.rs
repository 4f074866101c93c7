// src/data/drown_hosts.rs

use serde::{Deserialize, Serialize};

/// One host checked during the DROWN test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrownHostsData {
    /// IP address of the checked host.
    pub ip: String,

    /// True if export cipher suites are supported.
    pub export: bool,

    pub port: u16,

    /// True if special DROWN is vulnerable.
    pub special: bool,

    /// True if SSLv2 is supported.
    pub sslv2: bool,

    /// Check status, e.g. "ready" or "error".
    pub status: String,
}
