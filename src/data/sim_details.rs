// src/data/sim_details.rs

use serde::{Deserialize, Serialize};

use super::simulation::SimulationData;

/// All client handshake simulations run against the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimDetailsData {
    pub results: Vec<SimulationData>,
}
