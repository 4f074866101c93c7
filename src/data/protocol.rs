// src/data/protocol.rs

use serde::{Deserialize, Serialize};

/// One protocol version supported by the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolData {
    /// Protocol version number, e.g. 771 for TLS 1.2 (0x0303).
    pub id: i64,

    /// "SSL" or "TLS".
    pub name: String,

    /// Version string, e.g. "1.2".
    pub version: String,

    /// Set when SSLv2 is enabled but all its suites are disabled.
    pub v2_suites_disabled: Option<bool>,

    /// 0 if the protocol is insecure.
    pub q: Option<i64>,
}
