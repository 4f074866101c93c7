// src/data/hsts_preload.rs

use serde::{Deserialize, Serialize};

/// HSTS preload status against one preload database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HstsPreloadData {
    /// Source name, e.g. "Chrome".
    pub source: String,

    pub hostname: String,

    /// Preload status.
    pub status: String,

    /// Error message when the status is "error".
    pub error: Option<String>,

    /// Unix timestamp of the preload database retrieval.
    pub source_time: Option<i64>,
}
