// src/data/simulation.rs

use serde::{Deserialize, Serialize};

use super::sim_client::SimClientData;

/// Handshake simulation for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationData {
    pub client: SimClientData,

    /// Zero if the handshake was successful, 1 if it was not.
    pub error_code: i64,

    /// Error message when the simulation failed.
    pub error_message: Option<String>,

    /// Always 1 with the current implementation.
    pub attempts: i64,

    /// ID of the negotiated certificate chain.
    pub cert_chain_id: Option<String>,

    /// Negotiated protocol ID.
    pub protocol_id: Option<i64>,

    /// Negotiated suite ID.
    pub suite_id: Option<i64>,

    /// Negotiated suite name.
    pub suite_name: Option<String>,

    /// Negotiated key exchange, e.g. "ECDH".
    pub kx_type: Option<String>,

    /// Negotiated key exchange strength in RSA-equivalent bits.
    pub kx_strength: Option<i64>,

    /// Strength of the DH parameters, e.g. 1024.
    pub dh_bits: Option<i64>,

    pub dh_p: Option<i64>,

    pub dh_g: Option<i64>,

    pub dh_ys: Option<i64>,

    /// Length of the EC parameters when ECDHE is negotiated.
    pub named_group_bits: Option<i64>,

    /// EC curve ID when ECDHE is negotiated.
    pub named_group_id: Option<i64>,

    /// EC curve name when ECDHE is negotiated.
    pub named_group_name: Option<String>,

    /// Connection certificate key algorithm, e.g. "RSA".
    pub key_alg: Option<String>,

    /// Connection certificate key size, e.g. 2048.
    pub key_size: Option<i64>,

    /// Connection certificate signature algorithm.
    pub sig_alg: Option<String>,
}
