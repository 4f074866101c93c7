// src/data/status_codes.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Catalog of assessment status detail codes and their English
/// translations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCodesData {
    /// Status detail code mapped onto its English translation.
    pub status_details: HashMap<String, String>,
}
