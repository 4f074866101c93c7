// src/data/suite.rs

use serde::{Deserialize, Serialize};

/// One cipher suite supported by the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteData {
    /// Suite RFC ID.
    pub id: i64,

    /// Suite name, e.g. "TLS_RSA_WITH_RC4_128_SHA".
    pub name: String,

    /// Suite strength, e.g. 128.
    pub cipher_strength: i64,

    /// Key exchange type, e.g. "ECDH".
    pub kx_type: Option<String>,

    /// Key exchange strength in RSA-equivalent bits.
    pub kx_strength: Option<i64>,

    /// DH params, p component.
    pub dh_p: Option<i64>,

    /// DH params, g component.
    pub dh_g: Option<i64>,

    /// DH params, Ys component.
    pub dh_ys: Option<i64>,

    /// EC bits.
    pub named_group_bits: Option<i64>,

    /// EC curve ID.
    pub named_group_id: Option<i64>,

    /// EC curve name.
    pub named_group_name: Option<String>,

    /// Set when the suite is insecure or weak; absent for strong suites.
    pub q: Option<i64>,
}
