// src/data/caa_record.rs

use serde::{Deserialize, Serialize};

/// One DNS CAA record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaaRecordData {
    /// Record tag, e.g. "issue" or "iodef".
    pub tag: String,

    pub value: String,

    pub flags: i64,
}
