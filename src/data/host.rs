// src/data/host.rs

use serde::{Deserialize, Serialize};

use super::cert::CertData;
use super::endpoint::EndpointData;

/// One assessment job as the service sees it right now. Early snapshots
/// (status `DNS`, `IN_PROGRESS`) carry little beyond the status; the
/// endpoint and certificate lists fill in as the job completes. Only
/// `READY` and `ERROR` are terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostData {
    /// Assessment host, as provided at submission.
    pub host: String,

    /// Assessment port, e.g. 443.
    pub port: u16,

    /// Protocol, e.g. "http".
    pub protocol: String,

    /// True if the assessment is publicly available.
    pub is_public: bool,

    /// Assessment status: at least `DNS`, `IN_PROGRESS`, `READY` or
    /// `ERROR`.
    pub status: String,

    /// Status message when the status is `ERROR`.
    pub status_message: Option<String>,

    /// Assessment start time, in milliseconds since the epoch.
    pub start_time: Option<i64>,

    /// Assessment completion time, in milliseconds since the epoch.
    pub test_time: Option<i64>,

    /// Assessment engine version.
    pub engine_version: Option<String>,

    /// Grading criteria version.
    pub criteria_version: Option<String>,

    /// When the cached assessment expires, in milliseconds since the
    /// epoch. Present only for cached results.
    pub cache_expiry_time: Option<i64>,

    /// Hostnames the certificates cover, for multi-domain certificates.
    pub cert_hostnames: Option<Vec<String>>,

    /// Per-endpoint results; one entry per IP address of the host.
    pub endpoints: Option<Vec<EndpointData>>,

    /// Certificates seen during the assessment.
    pub certs: Option<Vec<CertData>>,
}
