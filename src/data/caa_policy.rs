// src/data/caa_policy.rs

use serde::{Deserialize, Serialize};

use super::caa_record::CaaRecordData;

/// CAA policy found for a certificate's hostname.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaaPolicyData {
    /// Hostname where the policy is located.
    pub policy_hostname: String,

    pub caa_records: Vec<CaaRecordData>,
}
