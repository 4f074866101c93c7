// src/data/cert.rs

use serde::{Deserialize, Serialize};

use super::caa_policy::CaaPolicyData;

/// One certificate seen during the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertData {
    pub id: String,

    pub subject: String,

    /// Hex-encoded serial number.
    pub serial_number: String,

    /// Common names extracted from the subject.
    pub common_names: Vec<String>,

    /// Alternative names.
    pub alt_names: Option<Vec<String>>,

    /// Not valid before, as a Unix timestamp in milliseconds.
    pub not_before: i64,

    /// Not valid after, as a Unix timestamp in milliseconds.
    pub not_after: i64,

    pub issuer_subject: String,

    /// Certificate signature algorithm.
    pub sig_alg: String,

    /// Revocation information present in the certificate, one bit per
    /// source.
    pub revocation_info: i64,

    /// CRL URIs extracted from the certificate.
    #[serde(rename = "crlURIs")]
    pub crl_uris: Option<Vec<String>>,

    /// OCSP URIs extracted from the certificate.
    #[serde(rename = "ocspURIs")]
    pub ocsp_uris: Option<Vec<String>>,

    /// Revocation status of the certificate.
    pub revocation_status: i64,

    /// Same, but for the CRL information only.
    pub crl_revocation_status: i64,

    /// Same, but for the OCSP information only.
    pub ocsp_revocation_status: i64,

    /// True if CAA is supported.
    pub dns_caa: Option<bool>,

    /// CAA policy, when CAA is supported.
    pub caa_policy: Option<CaaPolicyData>,

    /// True if OCSP must-staple is required.
    pub must_staple: bool,

    /// Server Gated Cryptography support.
    pub sgc: i64,

    /// "E" for Extended Validation certificates.
    pub validation_type: Option<String>,

    /// Certificate issues, one bit per issue.
    pub issues: Option<i64>,

    /// True if the certificate contains an embedded SCT.
    pub sct: bool,

    pub sha1_hash: String,

    pub sha256_hash: String,

    /// SHA-256 hash of the public key.
    pub pin_sha256: String,

    pub key_alg: String,

    /// Key size in bits appropriate for the key algorithm.
    pub key_size: i64,

    /// Key strength in equivalent RSA bits.
    pub key_strength: i64,

    /// True if the Debian weak-key flaw applies.
    pub key_known_debian_insecure: Option<bool>,

    /// PEM-encoded certificate.
    pub raw: String,
}
