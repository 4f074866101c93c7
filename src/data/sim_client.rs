// src/data/sim_client.rs

use serde::{Deserialize, Serialize};

/// One simulated client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimClientData {
    /// Unique client ID.
    pub id: i64,

    /// Client name, e.g. "Chrome".
    pub name: String,

    /// Client platform, e.g. "XP SP3".
    pub platform: Option<String>,

    /// Client version, e.g. "49".
    pub version: String,

    /// True for clients the rating guide takes into consideration.
    pub is_reference: bool,
}
