// src/data/hsts_policy.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The server's HSTS policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HstsPolicyData {
    /// What SSL Labs considers a sufficiently large max-age value.
    #[serde(rename = "LONG_MAX_AGE")]
    pub long_max_age: i64,

    /// Contents of the HSTS response header, if present.
    pub header: Option<String>,

    /// HSTS status.
    pub status: String,

    pub error: Option<String>,

    /// The max-age value from the policy; absent when the policy is
    /// missing or invalid.
    pub max_age: Option<i64>,

    pub include_sub_domains: Option<bool>,

    pub preload: Option<bool>,

    /// Raw policy directives.
    pub directives: Option<HashMap<String, serde_json::Value>>,
}
