// src/api/root_certs_raw.rs

use reqwest::Client;
use url::Url;

use crate::api::{verify_params, ApiClient};
use crate::error::Result;

const KNOWN_PARAMS: &[&str] = &["trustStore"];

/// Retrieves root certificates of a trust store as raw PEM text.
#[derive(Debug, Clone)]
pub struct RootCertsRaw {
    api: ApiClient,
}

impl RootCertsRaw {
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

    /// Returns the response body verbatim, no JSON involved.
    pub async fn get(&self, params: &[(&str, String)]) -> Result<String> {
        verify_params("RootCertsRaw", params, KNOWN_PARAMS);
        let response = self.api.call("getRootCertsRaw", params).await?;
        Ok(response.text().await?)
    }
}
