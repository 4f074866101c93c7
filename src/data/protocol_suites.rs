// src/data/protocol_suites.rs

use serde::{Deserialize, Serialize};

use super::suite::SuiteData;

/// Cipher suites supported under one protocol version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolSuitesData {
    /// Protocol version number.
    pub protocol: i64,

    pub list: Vec<SuiteData>,

    /// True if the server actively selects suites; absent when that could
    /// not be determined.
    pub preference: Option<bool>,

    /// True if the server honors client preferences for ChaCha20 suites.
    pub cha_cha20_preference: Option<bool>,
}
