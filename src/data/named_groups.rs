// src/data/named_groups.rs

use serde::{Deserialize, Serialize};

/// Named groups (elliptic curves) supported by the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedGroupsData {
    pub list: Vec<NamedGroupData>,

    /// True if the server has a named-group preference.
    pub preference: Option<bool>,
}

/// One named group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedGroupData {
    pub id: i64,

    /// Curve name, e.g. "secp256r1".
    pub name: String,

    pub bits: i64,
}
