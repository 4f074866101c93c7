// src/data/endpoint_details.rs

use serde::{Deserialize, Serialize};

use super::certificate_chain::CertificateChainData;
use super::drown_hosts::DrownHostsData;
use super::hpkp_policy::HpkpPolicyData;
use super::hsts_policy::HstsPolicyData;
use super::hsts_preload::HstsPreloadData;
use super::http_transaction::HttpTransactionData;
use super::named_groups::NamedGroupsData;
use super::protocol::ProtocolData;
use super::protocol_suites::ProtocolSuitesData;
use super::sim_details::SimDetailsData;
use super::static_pkp_policy::StaticPkpPolicyData;

/// Full cryptographic-configuration detail for one endpoint. Present only
/// when full detail was requested and the job is at least partially done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDetailsData {
    /// Endpoint assessment start time in milliseconds since the epoch.
    /// Should match the host's `start_time` when results are fetched
    /// across several invocations.
    pub host_start_time: i64,

    /// Server certificate chains.
    pub cert_chains: Vec<CertificateChainData>,

    /// Supported protocols.
    pub protocols: Vec<ProtocolData>,

    /// Supported cipher suites per protocol.
    pub suites: Option<Vec<ProtocolSuitesData>>,

    /// Suites observed only with clients that do not support SNI.
    pub no_sni_suites: Option<ProtocolSuitesData>,

    pub named_groups: Option<NamedGroupsData>,

    /// Contents of the HTTP Server response header, when known.
    pub server_signature: Option<String>,

    /// True if the endpoint is reachable via the hostname with the www
    /// prefix.
    pub prefix_delegation: bool,

    /// True if the endpoint is reachable via the hostname without the www
    /// prefix.
    pub non_prefix_delegation: bool,

    /// True if vulnerable to the BEAST attack.
    pub vuln_beast: Option<bool>,

    /// Endpoint support for renegotiation, one bit per property.
    pub reneg_support: Option<i64>,

    /// Endpoint support for session resumption.
    pub session_resumption: Option<i64>,

    /// Supported compression methods.
    pub compression_methods: Option<i64>,

    pub supports_npn: Option<bool>,

    /// Space-separated list of supported NPN protocols.
    pub npn_protocols: Option<String>,

    pub supports_alpn: Option<bool>,

    /// Space-separated list of supported ALPN protocols.
    pub alpn_protocols: Option<String>,

    /// Support for session tickets.
    pub session_tickets: Option<i64>,

    /// True if OCSP stapling is deployed.
    pub ocsp_stapling: Option<bool>,

    /// Revocation status of the stapled OCSP response.
    pub stapling_revocation_status: Option<i64>,

    pub stapling_revocation_error_message: Option<String>,

    /// True if SNI support is required to access the site.
    pub sni_required: Option<bool>,

    /// Status code of the final HTTP response seen; absent if the HTTP
    /// request failed.
    pub http_status_code: Option<i64>,

    /// Redirection target when the server forwards to another hostname.
    pub http_forwarding: Option<String>,

    pub supports_rc4: Option<bool>,

    /// True if RC4 is used with modern clients.
    pub rc4_with_modern: Option<bool>,

    /// True if only RC4 suites are supported.
    pub rc4_only: Option<bool>,

    /// Support for forward secrecy, one bit per property.
    pub forward_secrecy: Option<i64>,

    pub supports_aead: Option<bool>,

    #[serde(rename = "supportsCBC")]
    pub supports_cbc: Option<bool>,

    /// Protocol version intolerance issues.
    pub protocol_intolerance: Option<i64>,

    /// Various other types of intolerance.
    pub misc_intolerance: Option<i64>,

    /// Client handshake simulations.
    pub sims: Option<SimDetailsData>,

    pub heartbleed: Option<bool>,

    /// True if the Heartbeat extension is supported.
    pub heartbeat: Option<bool>,

    /// Result of the CVE-2014-0224 test.
    pub open_ssl_ccs: Option<i64>,

    /// Result of the CVE-2016-2107 test.
    #[serde(rename = "openSSLLuckyMinus20")]
    pub open_ssl_lucky_minus20: Option<i64>,

    /// Result of the CVE-2016-9244 test.
    pub ticketbleed: Option<i64>,

    /// Result of the ROBOT test.
    pub bleichenbacher: Option<i64>,

    pub zombie_poodle: Option<i64>,

    pub golden_doodle: Option<i64>,

    /// Result of the CVE-2019-1559 test.
    pub zero_length_padding_oracle: Option<i64>,

    pub sleeping_poodle: Option<i64>,

    /// True if vulnerable to POODLE.
    pub poodle: Option<bool>,

    /// Result of the POODLE TLS test.
    pub poodle_tls: Option<i64>,

    /// True if TLS_FALLBACK_SCSV is supported. Absent when it cannot be
    /// tested because the server supports only one protocol version.
    pub fallback_scsv: Option<bool>,

    /// True if vulnerable to FREAK (512-bit key exchange supported).
    pub freak: Option<bool>,

    /// Availability of embedded SCTs.
    pub has_sct: Option<i64>,

    /// Hex-encoded DH primes used by the server. Absent without DH key
    /// exchange support.
    pub dh_primes: Option<Vec<String>>,

    pub dh_uses_known_primes: Option<i64>,

    /// True if the ephemeral DH server value is reused.
    pub dh_ys_reuse: Option<bool>,

    /// True if the server reuses its ECDHE values.
    pub ecdh_parameter_reuse: Option<bool>,

    /// True if DH parameters weaker than 1024 bits are used.
    pub logjam: Option<bool>,

    /// True if the server honors client preferences for ChaCha20 suites.
    pub cha_cha20_preference: Option<bool>,

    pub hsts_policy: Option<HstsPolicyData>,

    /// Preloaded HSTS policy information.
    pub hsts_preloads: Option<Vec<HstsPreloadData>>,

    pub hpkp_policy: Option<HpkpPolicyData>,

    pub hpkp_ro_policy: Option<HpkpPolicyData>,

    pub static_pkp_policy: Option<StaticPkpPolicyData>,

    pub http_transactions: Option<Vec<HttpTransactionData>>,

    /// Hosts checked in the DROWN test.
    pub drown_hosts: Option<Vec<DrownHostsData>>,

    /// True if an error occurred during the DROWN test.
    pub drown_errors: Option<bool>,

    /// True if vulnerable to DROWN.
    pub drown_vulnerable: Option<bool>,

    /// True if the mandatory TLS 1.3 suite (TLS_AES_128_GCM_SHA256) is
    /// supported; absent when TLS 1.3 is not.
    #[serde(rename = "implementsTLS13MandatoryCS")]
    pub implements_tls13_mandatory_cs: Option<bool>,

    /// Result of the 0-RTT test; only performed with TLS 1.3 enabled.
    #[serde(rename = "zeroRTTEnabled")]
    pub zero_rtt_enabled: Option<i64>,
}
