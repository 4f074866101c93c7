// src/data/info.rs

use serde::{Deserialize, Serialize};

/// Server-advertised state of the assessment engine. A read-only snapshot,
/// re-fetched on demand; the orchestrator consults it before every
/// submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoData {
    /// SSL Labs software version as a string, e.g. "2.2.0".
    pub engine_version: String,

    /// Rating criteria version, e.g. "2009q".
    pub criteria_version: String,

    /// Maximum number of concurrent assessments the client is allowed to
    /// initiate.
    pub max_assessments: u64,

    /// Number of ongoing assessments submitted by this client.
    pub current_assessments: u64,

    /// Cool-off period in milliseconds after each new assessment. A local
    /// maximum of one new assessment per that interval is advised.
    pub new_assessment_cool_off: u64,

    /// Messages the operators want the client to relay, e.g. about
    /// upcoming maintenance.
    pub messages: Vec<String>,
}
