// src/data/endpoint.rs

use serde::{Deserialize, Serialize};

use super::endpoint_details::EndpointDetailsData;

/// Assessment result for one endpoint (IP address) of a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointData {
    /// Endpoint IP address, IPv4 or IPv6.
    pub ip_address: String,

    /// Server name retrieved via reverse DNS.
    pub server_name: Option<String>,

    /// "Ready" if the endpoint assessment was successful.
    pub status_message: String,

    /// Code of the operation currently in progress.
    pub status_details: Option<String>,

    /// Description of the operation currently in progress.
    pub status_details_message: Option<String>,

    /// A+ through F, T (no trust) or M (certificate name mismatch).
    pub grade: Option<String>,

    /// Grade if trust issues are ignored.
    pub grade_trust_ignored: Option<String>,

    /// Grade under upcoming criteria changes, if it would differ.
    pub future_grade: Option<String>,

    /// True if warnings might affect the score.
    pub has_warnings: Option<bool>,

    /// Raised for exceptional configurations; such sites get an A+.
    pub is_exceptional: Option<bool>,

    /// 0 to 100, or -1 before the assessment has started.
    pub progress: Option<i64>,

    /// Assessment duration in milliseconds.
    pub duration: Option<i64>,

    /// Estimated seconds until completion.
    pub eta: Option<i64>,

    /// Domain name delegation with and without the www prefix.
    pub delegation: i64,

    /// Full per-endpoint detail; only present when requested with the
    /// `all` parameter.
    pub details: Option<EndpointDetailsData>,
}
