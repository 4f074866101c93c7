// src/api/analyze.rs

use reqwest::Client;
use url::Url;

use crate::api::{verify_params, ApiClient};
use crate::data::HostData;
use crate::error::Result;

const KNOWN_PARAMS: &[&str] = &[
    "publish",
    "startNew",
    "fromCache",
    "maxAge",
    "all",
    "ignoreMismatch",
];

/// Invokes an assessment and checks its progress.
///
/// `startNew` and `fromCache` are mutually exclusive on the remote side;
/// callers composing both are on their own. The orchestrator in
/// [`crate::Ssllabs`] never produces that combination.
#[derive(Debug, Clone)]
pub struct Analyze {
    api: ApiClient,
}

impl Analyze {
    pub fn new(client: Option<Client>) -> Self {
        Self {
            api: ApiClient::new(client),
        }
    }

    pub fn with_base_url(client: Option<Client>, base_url: Url) -> Self {
        Self {
            api: ApiClient::with_base_url(client, base_url),
        }
    }

    /// Fetches the current assessment state of `host`. `params` carries the
    /// optional query parameters; leave out a pair and it never reaches the
    /// query string. Unknown keys warn but are still sent.
    pub async fn get(&self, host: &str, params: &[(&str, String)]) -> Result<HostData> {
        verify_params("Analyze", params, KNOWN_PARAMS);
        let mut query: Vec<(&str, String)> = vec![("host", host.to_string())];
        query.extend(params.iter().map(|(key, value)| (*key, value.clone())));
        let response = self.api.call("analyze", &query).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
