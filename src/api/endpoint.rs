// src/api/endpoint.rs

use reqwest::Client;
use url::Url;

use crate::api::{envelope_message, verify_params, ApiClient};
use crate::data::EndpointData;
use crate::error::{Error, Result};

const KNOWN_PARAMS: &[&str] = &["fromCache"];

/// Retrieves detailed information about one endpoint of a host.
#[derive(Debug, Clone)]
pub struct Endpoint {
    api: ApiClient,
}

impl Endpoint {
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

    /// Fetches endpoint details for `host` at the endpoint IP address `s`.
    ///
    /// The API reports bad parameters through an error envelope in a 2xx
    /// payload; that surfaces as [`Error::Endpoint`] with the remote
    /// message rather than as a deserialization failure.
    pub async fn get(&self, host: &str, s: &str, params: &[(&str, String)]) -> Result<EndpointData> {
        verify_params("Endpoint", params, KNOWN_PARAMS);
        let mut query: Vec<(&str, String)> =
            vec![("host", host.to_string()), ("s", s.to_string())];
        query.extend(params.iter().map(|(key, value)| (*key, value.clone())));
        let response = self.api.call("getEndpointData", &query).await?;
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(data) => Ok(data),
            Err(err) => match envelope_message(&body) {
                Some(message) => Err(Error::Endpoint(message)),
                None => Err(Error::MalformedResponse(err)),
            },
        }
    }
}
