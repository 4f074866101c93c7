// src/data/certificate_chain.rs

use serde::{Deserialize, Serialize};

use super::trust_path::TrustPathData;

/// One certificate chain presented by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateChainData {
    pub id: String,

    /// Certificate IDs from leaf to root.
    pub cert_ids: Vec<String>,

    /// Trust paths built from this chain.
    pub trust_paths: Vec<TrustPathData>,

    /// Chain issues, one bit per issue.
    pub issues: Option<i64>,

    /// True if the chain was only seen without SNI.
    pub no_sni: Option<bool>,
}
