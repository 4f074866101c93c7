// src/data/trust.rs

use serde::{Deserialize, Serialize};

/// Trust verdict against one root store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustData {
    /// Trust store being used, e.g. "Mozilla".
    pub root_store: String,

    /// True if trusted against that store.
    pub is_trusted: Option<bool>,

    /// Error message, if any.
    pub trust_error_message: Option<String>,
}
