// src/data/register.rs

use serde::{Deserialize, Serialize};

/// Response of the v4 `register` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    /// Registration message, e.g. "User successfully registered".
    pub message: String,

    /// Either "success" or "failure".
    pub status: String,
}
