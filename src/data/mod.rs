// src/data/mod.rs

// One file per record shape returned by the SSL Labs API. All of these
// are plain serde value records, no behavior. Fields the API may omit or
// null are `Option<T>`; a required field missing from a payload surfaces
// as a malformed-response error at the caller.

pub mod caa_policy;
pub mod caa_record;
pub mod cert;
pub mod certificate_chain;
pub mod drown_hosts;
pub mod endpoint;
pub mod endpoint_details;
pub mod host;
pub mod hpkp_policy;
pub mod hsts_policy;
pub mod hsts_preload;
pub mod http_transaction;
pub mod info;
pub mod named_groups;
pub mod protocol;
pub mod protocol_suites;
pub mod register;
pub mod sim_client;
pub mod sim_details;
pub mod simulation;
pub mod static_pkp_policy;
pub mod status_codes;
pub mod suite;
pub mod trust;
pub mod trust_path;

pub use self::caa_policy::CaaPolicyData;
pub use self::caa_record::CaaRecordData;
pub use self::cert::CertData;
pub use self::certificate_chain::CertificateChainData;
pub use self::drown_hosts::DrownHostsData;
pub use self::endpoint::EndpointData;
pub use self::endpoint_details::EndpointDetailsData;
pub use self::host::HostData;
pub use self::hpkp_policy::HpkpPolicyData;
pub use self::hsts_policy::HstsPolicyData;
pub use self::hsts_preload::HstsPreloadData;
pub use self::http_transaction::HttpTransactionData;
pub use self::info::InfoData;
pub use self::named_groups::{NamedGroupData, NamedGroupsData};
pub use self::protocol::ProtocolData;
pub use self::protocol_suites::ProtocolSuitesData;
pub use self::register::RegisterData;
pub use self::sim_client::SimClientData;
pub use self::sim_details::SimDetailsData;
pub use self::simulation::SimulationData;
pub use self::static_pkp_policy::StaticPkpPolicyData;
pub use self::status_codes::StatusCodesData;
pub use self::suite::SuiteData;
pub use self::trust::TrustData;
pub use self::trust_path::TrustPathData;
