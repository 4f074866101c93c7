// src/data/trust_path.rs

use serde::{Deserialize, Serialize};

use super::trust::TrustData;

/// One path from a leaf certificate to a trusted root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustPathData {
    /// Certificate IDs from leaf to root.
    pub cert_ids: Vec<String>,

    /// Trust verdicts per trust store.
    pub trust: Vec<TrustData>,

    /// True if a key in the path is pinned.
    pub is_pinned: Option<bool>,

    /// Pins matched against the HPKP policy.
    pub matched_pins: Option<i64>,

    /// Pins not matched against the HPKP policy.
    pub unmatched_pins: Option<i64>,
}
