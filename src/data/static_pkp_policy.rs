// src/data/static_pkp_policy.rs

use serde::{Deserialize, Serialize};

/// The server's static public key pinning policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPkpPolicyData {
    /// SPKP status.
    pub status: String,

    /// Error message when the policy is invalid.
    pub error: Option<String>,

    pub include_sub_domains: Option<bool>,

    pub report_uri: Option<String>,

    /// All pins used by the policy.
    pub pins: Vec<serde_json::Value>,

    /// Pins that match the current configuration.
    pub matched_pins: Vec<serde_json::Value>,

    /// All forbidden pins used by the policy.
    pub forbidden_pins: Vec<serde_json::Value>,

    /// Forbidden pins that match the current configuration.
    pub matched_forbidden_pins: Vec<serde_json::Value>,
}
