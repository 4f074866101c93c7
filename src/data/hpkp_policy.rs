// src/data/hpkp_policy.rs

use serde::{Deserialize, Serialize};

/// The server's HPKP or HPKP-RO policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HpkpPolicyData {
    /// Contents of the HPKP response header, if present.
    pub header: Option<String>,

    /// HPKP status.
    pub status: String,

    /// Error message when the policy is invalid.
    pub error: Option<String>,

    /// The max-age value from the policy.
    pub max_age: Option<i64>,

    pub include_sub_domains: Option<bool>,

    /// The report-uri value from the policy.
    pub report_uri: Option<String>,

    /// All pins used by the policy.
    pub pins: Vec<serde_json::Value>,

    /// Pins that match the current configuration.
    pub matched_pins: Vec<serde_json::Value>,

    /// Raw policy directives as name-value pairs.
    pub directives: Vec<serde_json::Value>,
}
